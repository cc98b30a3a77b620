//! Error types for calculator operations.

use thiserror::Error;

use crate::calculator::OperationKey;

/// Errors raised while dispatching or evaluating an operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Operation {key} is not supported")]
    UnsupportedOperation { key: OperationKey },

    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Domain failure raised by a registered operation itself.
    #[error("Operation {operation} failed: {reason}")]
    OperationFailed { operation: String, reason: String },

    #[error("Invalid chain step '{input}': {reason}")]
    InvalidStep { input: String, reason: String },

    #[error("Invalid alias '{alias}': {reason}")]
    InvalidAlias { alias: String, reason: String },
}

impl CalcError {
    pub fn unsupported(key: impl Into<OperationKey>) -> Self {
        Self::UnsupportedOperation { key: key.into() }
    }

    /// Build the failure a custom operation returns for inputs outside its domain.
    pub fn operation_failed(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::OperationFailed {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedOperation { .. } => "UNSUPPORTED_OPERATION",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::OperationFailed { .. } => "OPERATION_FAILED",
            Self::InvalidStep { .. } => "INVALID_STEP",
            Self::InvalidAlias { .. } => "INVALID_ALIAS",
        }
    }

    /// Recovery hint shown next to the error on the command line.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedOperation { .. } => {
                Some("Run 'opcalc ops' to list the operations that are available")
            }
            Self::DivisionByZero => Some("Use a non-zero divisor"),
            Self::OperationFailed { .. } => None,
            Self::InvalidStep { .. } => Some("Write each step as <op>:<operand>, e.g. add:3"),
            Self::InvalidAlias { .. } => {
                Some("Check the [calculator.aliases] table in .opcalc/settings.toml")
            }
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
