//! Tests for CLI argument handling against the built binary.

mod common;

use common::temp_config;
use std::process::Command;

fn counter_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_reactive-counter"))
}

#[test]
fn test_help_lists_options() {
    let output = counter_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--overflow"));
    assert!(stdout.contains("--print-config"));
}

#[test]
fn test_print_config_reflects_file_and_overrides() {
    let (_dir, path) = temp_config("[ui]\ntitle = \"From File\"\n");
    let output = counter_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--overflow")
        .arg("wrap")
        .arg("--print-config")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("title = \"From File\""), "got: {stdout}");
    assert!(stdout.contains("overflow = \"wrap\""), "got: {stdout}");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    let output = counter_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"), "got: {stderr}");
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let output = counter_cmd()
        .arg("--config")
        .arg("/nonexistent/reactive-counter.toml")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to read config file"));
}

#[test]
fn test_unknown_overflow_value_is_rejected() {
    let output = counter_cmd()
        .arg("--overflow")
        .arg("explode")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"));
}
