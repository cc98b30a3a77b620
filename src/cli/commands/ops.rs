//! Ops command.

use serde::Serialize;

use super::emit_success;
use crate::calculator::{Calculator, OperationKey};
use crate::io::{ExitCode, OutputFormat};

#[derive(Debug, Serialize)]
struct OperationInfo {
    name: String,
    builtin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<char>,
}

impl From<&OperationKey> for OperationInfo {
    fn from(key: &OperationKey) -> Self {
        Self {
            name: key.to_string(),
            builtin: key.is_builtin(),
            symbol: key.as_builtin().map(|op| op.symbol()),
        }
    }
}

/// Run ops command - list supported operations.
pub fn run_ops(calc: &Calculator, format: OutputFormat) -> ExitCode {
    let operations: Vec<OperationInfo> = calc.operations().iter().map(Into::into).collect();

    let text = operations
        .iter()
        .map(|info| match info.symbol {
            Some(symbol) => format!("{:<12} {symbol}", info.name),
            None => format!("{:<12} (custom)", info.name),
        })
        .collect::<Vec<_>>()
        .join("\n");

    emit_success(format, operations, &text)
}
