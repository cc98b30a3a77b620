use anyhow::Context;
use clap::Parser;
use opcalc::cli::commands::{calc, init, ops};
use opcalc::cli::{Cli, Commands};
use opcalc::io::{ExitCode, OutputFormat};
use opcalc::{Calculator, Settings, logging};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Settings::load().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        Settings::default()
    });

    // CLI args override config
    if cli.debug {
        config.logging.default = "debug".to_string();
    }
    if cli.precision.is_some() {
        config.calculator.precision = cli.precision;
    }
    logging::init_with_config(&config.logging);

    let format = OutputFormat::from_json_flag(cli.json);
    let precision = config.calculator.precision;

    let code = match &cli.command {
        Commands::Init { force } => init::run_init(*force),
        Commands::Config => init::run_config(&config),
        Commands::Calc { op, a, b } => with_calculator(&config, |calculator| {
            calc::run_calc(calculator, op, *a, *b, format, precision)
        }),
        Commands::Chain { initial, steps } => with_calculator(&config, |calculator| {
            calc::run_chain(calculator, *initial, steps, format, precision)
        }),
        Commands::Ops => with_calculator(&config, |calculator| ops::run_ops(calculator, format)),
    };

    code.into()
}

/// Build the calculator from settings and run `f` with it.
fn with_calculator(config: &Settings, f: impl FnOnce(&Calculator) -> ExitCode) -> ExitCode {
    match build_calculator(config) {
        Ok(calculator) => f(&calculator),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::GeneralError
        }
    }
}

fn build_calculator(config: &Settings) -> anyhow::Result<Calculator> {
    Calculator::from_settings(&config.calculator).context("invalid [calculator.aliases] entry")
}
