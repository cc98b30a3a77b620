//! Process exit codes.

use crate::error::CalcError;

/// Exit codes returned by the `opcalc` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    UnsupportedOperation = 2,
    ArithmeticError = 3,
    InvalidInput = 4,
}

impl ExitCode {
    pub fn from_error(err: &CalcError) -> Self {
        match err {
            CalcError::UnsupportedOperation { .. } => Self::UnsupportedOperation,
            CalcError::DivisionByZero | CalcError::OperationFailed { .. } => Self::ArithmeticError,
            CalcError::InvalidStep { .. } | CalcError::InvalidAlias { .. } => Self::InvalidInput,
        }
    }
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as u8
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
