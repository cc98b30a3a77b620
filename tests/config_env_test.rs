use opcalc::{Calculator, Settings};
use std::env;
use tempfile::TempDir;

#[test]
fn test_env_override_with_double_underscore() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("settings.toml");
    std::fs::write(
        &config_path,
        r#"
[logging]
default = "info"

[calculator]
precision = 2
"#,
    )
    .unwrap();

    unsafe {
        // Use double underscore to separate nested levels
        env::set_var("OPCALC_CALCULATOR__PRECISION", "5");
        env::set_var("OPCALC_CALCULATOR__ALIASES__PLUS", "add");
    }

    let settings = Settings::load_from(&config_path);

    unsafe {
        // Clean up
        env::remove_var("OPCALC_CALCULATOR__PRECISION");
        env::remove_var("OPCALC_CALCULATOR__ALIASES__PLUS");
    }

    let settings = settings.unwrap();

    // Environment variable overrides config file
    assert_eq!(settings.calculator.precision, Some(5));
    // Config file value remains when no env var
    assert_eq!(settings.logging.default, "info");
    // Env var adds a value not in config
    assert_eq!(settings.calculator.aliases["plus"], "add");

    let calc = Calculator::from_settings(&settings.calculator).unwrap();
    assert_eq!(calc.calculate("plus", 2.0, 2.0), Ok(4.0));
}
