//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::convert::Infallible;

use crate::calculator::{ChainStep, OperationKey};

/// Parse an operation argument, resolving builtin names and symbols.
///
/// Clap would otherwise pick `From<String>` and turn every name into a custom key.
fn parse_operation_key(s: &str) -> Result<OperationKey, Infallible> {
    s.parse()
}

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

const AFTER_HELP: &str = "\
Quick Start:
  $ opcalc calc add 2 3                # 5
  $ opcalc calc / 6 -3                 # -2
  $ opcalc chain 5 add:3 multiply:2    # 16
  $ opcalc chain 5 -- -:3 *:2          # 4
  $ opcalc ops                         # list operations
  $ opcalc init                        # write .opcalc/settings.toml";

#[derive(Parser, Debug)]
#[command(
    name = "opcalc",
    version,
    about = "Arithmetic calculator with a runtime operation registry",
    styles = clap_cargo_style(),
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Emit a JSON envelope instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging (overrides config)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Decimal places for text output (overrides config)
    #[arg(long, global = true, value_name = "DIGITS")]
    pub precision: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up .opcalc directory with default settings
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Display active settings
    Config,

    /// Apply one operation to two operands
    #[command(allow_negative_numbers = true)]
    Calc {
        /// Operation name or symbol: add, subtract, multiply, divide, + - * / or an alias
        #[arg(allow_hyphen_values = true, value_parser = parse_operation_key)]
        op: OperationKey,

        /// Left operand
        a: f64,

        /// Right operand
        b: f64,
    },

    /// Fold a sequence of <op>:<operand> steps over an initial value
    #[command(allow_negative_numbers = true)]
    Chain {
        /// Starting accumulator
        initial: f64,

        /// Steps applied left to right, e.g. add:3 multiply:2
        ///
        /// Steps starting with '-' (such as -:3) must follow a `--` separator.
        steps: Vec<ChainStep>,
    },

    /// List supported operations
    Ops,
}
