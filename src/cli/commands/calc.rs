//! Calc and Chain commands.

use serde_json::json;

use super::{emit_error, emit_success};
use crate::calculator::{Calculator, ChainStep, OperationKey};
use crate::io::{ExitCode, OutputFormat, format_number, json_number};

/// Run calc command - apply one operation to two operands.
pub fn run_calc(
    calc: &Calculator,
    op: &OperationKey,
    a: f64,
    b: f64,
    format: OutputFormat,
    precision: Option<usize>,
) -> ExitCode {
    match calc.calculate(op, a, b) {
        Ok(result) => emit_success(
            format,
            json!({
                "operation": op,
                "a": json_number(a),
                "b": json_number(b),
                "result": json_number(result),
            }),
            &format_number(result, precision),
        ),
        Err(e) => emit_error(format, &e),
    }
}

/// Run chain command - fold steps left to right over `initial`.
pub fn run_chain(
    calc: &Calculator,
    initial: f64,
    steps: &[ChainStep],
    format: OutputFormat,
    precision: Option<usize>,
) -> ExitCode {
    match calc.chain_operations(initial, steps) {
        Ok(result) => emit_success(
            format,
            json!({
                "initial": json_number(initial),
                "steps": steps
                    .iter()
                    .map(|step| json!({ "operation": step.key, "operand": json_number(step.operand) }))
                    .collect::<Vec<_>>(),
                "result": json_number(result),
            }),
            &format_number(result, precision),
        ),
        Err(e) => emit_error(format, &e),
    }
}
