//! The four default arithmetic operations.

use std::sync::Arc;

use super::key::BuiltinOp;
use super::registry::{OperationFn, OperationRegistry};
use crate::error::{CalcError, CalcResult};

pub fn add(a: f64, b: f64) -> CalcResult<f64> {
    Ok(a + b)
}

pub fn subtract(a: f64, b: f64) -> CalcResult<f64> {
    Ok(a - b)
}

pub fn multiply(a: f64, b: f64) -> CalcResult<f64> {
    Ok(a * b)
}

/// Fails for a divisor of exactly zero (either sign) before dividing.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

impl BuiltinOp {
    /// Function backing this builtin.
    pub fn function(&self) -> OperationFn {
        let f: fn(f64, f64) -> CalcResult<f64> = match self {
            Self::Add => add,
            Self::Subtract => subtract,
            Self::Multiply => multiply,
            Self::Divide => divide,
        };
        Arc::new(f)
    }
}

/// Register every builtin, replacing whatever the keys were bound to.
pub fn register_builtins(registry: &mut OperationRegistry) {
    for op in BuiltinOp::ALL {
        registry.register(op, op.function());
    }
}
