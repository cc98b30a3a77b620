use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn opcalc(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_opcalc"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to run opcalc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_calc_command() {
    let temp_dir = TempDir::new().unwrap();

    let output = opcalc(temp_dir.path(), &["calc", "add", "2", "3"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "5");

    let output = opcalc(temp_dir.path(), &["calc", "/", "-6", "3"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "-2");
}

#[test]
fn test_calc_errors_set_exit_code() {
    let temp_dir = TempDir::new().unwrap();

    let output = opcalc(temp_dir.path(), &["calc", "divide", "6", "0"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("Cannot divide by zero"));

    let output = opcalc(temp_dir.path(), &["calc", "POWER", "2", "3"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Operation POWER is not supported"));
}

#[test]
fn test_chain_command() {
    let temp_dir = TempDir::new().unwrap();

    let output = opcalc(temp_dir.path(), &["chain", "5", "add:3", "multiply:2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "16");

    let output = opcalc(temp_dir.path(), &["chain", "5"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "5");
}

#[test]
fn test_chain_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let output = opcalc(temp_dir.path(), &["--json", "chain", "5", "add:3", "/:0"]);
    assert_eq!(output.status.code(), Some(3));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["status"], "error");
    assert_eq!(value["code"], "DIVISION_BY_ZERO");
    assert!(value["data"].is_null());

    let output = opcalc(temp_dir.path(), &["--json", "chain", "5", "add:3"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["data"]["result"], 8.0);
}

#[test]
fn test_precision_flag() {
    let temp_dir = TempDir::new().unwrap();

    let output = opcalc(temp_dir.path(), &["--precision", "3", "calc", "/", "2", "3"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "0.667");
}

#[test]
fn test_init_command() {
    let temp_dir = TempDir::new().unwrap();

    let output = opcalc(temp_dir.path(), &["init"]);
    assert!(output.status.success());

    // Check that config file was created
    let config_path = temp_dir.path().join(".opcalc/settings.toml");
    assert!(config_path.exists());

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("version = 1"));
    assert!(content.contains("[logging]"));

    // Second init without --force refuses
    let output = opcalc(temp_dir.path(), &["init"]);
    assert!(!output.status.success());

    let output = opcalc(temp_dir.path(), &["init", "--force"]);
    assert!(output.status.success());
}

#[test]
fn test_aliases_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".opcalc");
    std::fs::create_dir_all(&config_dir).unwrap();

    let config_content = r#"
version = 2

[calculator.aliases]
plus = "add"
"#;
    std::fs::write(config_dir.join("settings.toml"), config_content).unwrap();

    let output = opcalc(temp_dir.path(), &["calc", "plus", "40", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "42");

    let output = opcalc(temp_dir.path(), &["ops"]);
    assert!(output.status.success());
    let listing = stdout(&output);
    for name in ["add", "subtract", "multiply", "divide", "plus"] {
        assert!(listing.contains(name), "missing {name} in {listing}");
    }

    let output = opcalc(temp_dir.path(), &["config"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("version = 2"));
}

#[test]
fn test_alias_to_unknown_operation_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".opcalc");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("settings.toml"),
        "[calculator.aliases]\npow = \"power\"\n",
    )
    .unwrap();

    let output = opcalc(temp_dir.path(), &["calc", "add", "1", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("power"));
}

#[test]
fn test_calc_builtin_name_any_case() {
    let temp_dir = TempDir::new().unwrap();

    let output = opcalc(temp_dir.path(), &["calc", "ADD", "1", "2"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "3");

    let output = opcalc(temp_dir.path(), &["calc", "Divide", "1", "0"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_json_non_finite_result() {
    let temp_dir = TempDir::new().unwrap();

    let output = opcalc(temp_dir.path(), &["--json", "chain", "1e308", "multiply:10"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["data"]["result"], "inf");

    let output = opcalc(temp_dir.path(), &["--json", "calc", "multiply", "-1e308", "10"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["data"]["result"], "-inf");
    assert_eq!(value["data"]["a"], -1e308);
}

#[test]
fn test_chain_json_flag_after_steps() {
    let temp_dir = TempDir::new().unwrap();

    let output = opcalc(temp_dir.path(), &["chain", "5", "add:3", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["data"]["result"], 8.0);

    let output = opcalc(temp_dir.path(), &["chain", "5", "--", "-:3", "*:2"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "4");
}

#[test]
fn test_alias_chain_independent_of_name_order() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".opcalc");
    std::fs::create_dir_all(&config_dir).unwrap();
    // "aplus" sorts before its target "plus"
    std::fs::write(
        config_dir.join("settings.toml"),
        "[calculator.aliases]\naplus = \"plus\"\nplus = \"add\"\n",
    )
    .unwrap();

    let output = opcalc(temp_dir.path(), &["calc", "aplus", "40", "2"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "42");
}

#[test]
fn test_alias_named_like_builtin_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".opcalc");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("settings.toml"),
        "[calculator.aliases]\nADD = \"subtract\"\n",
    )
    .unwrap();

    let output = opcalc(temp_dir.path(), &["calc", "add", "1", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid alias 'ADD'"));
}
