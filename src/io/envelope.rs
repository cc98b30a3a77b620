//! JSON output envelope for CLI commands.
//!
//! Every command prints this structure when `--json` is used, so scripts can
//! branch on `status` / `code` without parsing human-readable text.

use serde::{Deserialize, Serialize};

use super::exit_code::ExitCode;
use crate::error::CalcError;

/// Operation outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Error,
}

/// Error details with suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Recovery suggestions
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

/// Unified JSON output envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    /// Operation outcome
    pub status: Status,

    /// Machine-readable result code
    pub code: String,

    /// Unix exit code
    pub exit_code: u8,

    /// Human-readable message
    pub message: String,

    /// Result payload (null on error)
    pub data: Option<T>,

    /// Error details (null on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
}

impl<T> Envelope<T> {
    /// Create a success envelope with data.
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            code: "OK".to_string(),
            exit_code: ExitCode::Success.into(),
            message: "Operation completed successfully".to_string(),
            data: Some(data),
            error: None,
        }
    }

    /// Create an error envelope from a calculator error.
    pub fn from_error(err: &CalcError) -> Self {
        Self {
            status: Status::Error,
            code: err.code().to_string(),
            exit_code: ExitCode::from_error(err).into(),
            message: err.to_string(),
            data: None,
            error: Some(ErrorDetails {
                suggestions: err.suggestion().map(str::to_string).into_iter().collect(),
            }),
        }
    }
}

impl<T: Serialize> Envelope<T> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
