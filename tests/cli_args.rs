//! Tests for CLI argument parsing, run against the built binary.
//!
//! Only non-interactive paths are exercised: `--help`, `--check-config`,
//! and failures that exit before the terminal is touched.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn counter_echo_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_counter-echo"))
}

#[test]
fn test_help_lists_options() {
    let output = counter_echo_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--overflow"));
    assert!(stdout.contains("--check-config"));
}

#[test]
fn test_check_config_with_overrides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app]\ntitle = \"From File\"\n").unwrap();

    let output = counter_echo_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--overflow")
        .arg("wrap")
        .arg("--check-config")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Config OK"));
    assert!(stdout.contains("title: From File"));
    assert!(stdout.contains("overflow: Wrap"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_check_config_reports_defaults_without_file() {
    let dir = TempDir::new().unwrap();
    let output = counter_echo_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .arg("--check-config")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Config OK (defaults)"), "got: {stdout}");
    assert!(stdout.contains("title: Expo Test App"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_check_config_names_default_file_when_present() {
    let dir = TempDir::new().unwrap();
    let app_dir = dir.path().join("counter-echo");
    fs::create_dir_all(&app_dir).unwrap();
    fs::write(app_dir.join("config.toml"), "[app]\ntitle = \"Home\"\n").unwrap();

    let output = counter_echo_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .arg("--check-config")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("config.toml"), "got: {stdout}");
    assert!(!stdout.contains("(defaults)"));
    assert!(stdout.contains("title: Home"));
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = counter_echo_cmd()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("--check-config")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: loading configuration"));
    assert!(stderr.contains("nope.toml"));
}

#[test]
fn test_invalid_overflow_value_is_rejected() {
    let output = counter_echo_cmd()
        .arg("--overflow")
        .arg("explode")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid value"),
        "Expected clap error about invalid value, got: {}",
        stderr
    );
}
