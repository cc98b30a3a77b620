//! Init and Config commands.

use crate::config::{CONFIG_DIR, Settings};
use crate::io::ExitCode;

/// Run init command - create configuration file in the current directory.
pub fn run_init(force: bool) -> ExitCode {
    let dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot determine current directory: {e}");
            return ExitCode::GeneralError;
        }
    };

    let config_path = dir.join(CONFIG_DIR).join("settings.toml");
    if config_path.exists() && !force {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Use --force to overwrite");
        return ExitCode::GeneralError;
    }

    match Settings::init_config_file(&dir, force) {
        Ok(path) => {
            crate::log_event!("cli", "initialized", "{}", path.display());
            println!("Created configuration file at: {}", path.display());
            println!("Edit this file to customize your settings.");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::GeneralError
        }
    }
}

/// Run config command - display current configuration.
pub fn run_config(config: &Settings) -> ExitCode {
    if let Err(warning) = Settings::check_init() {
        eprintln!("Warning: {warning}");
        eprintln!("Showing defaults merged with environment overrides.");
    }

    println!("Current Configuration:");
    println!("{}", "=".repeat(50));
    match toml::to_string_pretty(config) {
        Ok(toml_str) => {
            println!("{toml_str}");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error displaying config: {e}");
            ExitCode::GeneralError
        }
    }
}
