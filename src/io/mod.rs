//! Output handling for the CLI.
//!
//! This module provides:
//! - Text and JSON output formatting
//! - Consistent exit codes

pub mod envelope;
pub mod exit_code;
pub mod format;

pub use envelope::{Envelope, ErrorDetails, Status};
pub use exit_code::ExitCode;
pub use format::{OutputFormat, format_number, json_number};
