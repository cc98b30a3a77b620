pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;

pub use calculator::{
    BuiltinOp, Calculator, ChainStep, OperationFn, OperationKey, OperationRegistry, operation,
};
pub use config::Settings;
pub use error::{CalcError, CalcResult};
