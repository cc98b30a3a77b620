//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module and returns the process
//! exit code.

pub mod calc;
pub mod init;
pub mod ops;

use console::style;
use serde::Serialize;

use crate::error::CalcError;
use crate::io::{Envelope, ExitCode, OutputFormat};

/// Print a successful payload: JSON envelope or the given text.
pub(crate) fn emit_success<T: Serialize>(format: OutputFormat, data: T, text: &str) -> ExitCode {
    if format.is_json() {
        match Envelope::success(data).to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing output: {e}");
                return ExitCode::GeneralError;
            }
        }
    } else {
        println!("{text}");
    }
    ExitCode::Success
}

/// Report a calculator error and map it to its exit code.
pub(crate) fn emit_error(format: OutputFormat, err: &CalcError) -> ExitCode {
    crate::debug_event!("cli", "failed", "{err}");

    if format.is_json() {
        let envelope: Envelope = Envelope::from_error(err);
        match envelope.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error serializing output: {e}"),
        }
    } else {
        eprintln!("{} {err}", style("Error:").red().bold());
        if let Some(suggestion) = err.suggestion() {
            eprintln!("  {} {suggestion}", style("hint:").dim());
        }
    }
    ExitCode::from_error(err)
}
