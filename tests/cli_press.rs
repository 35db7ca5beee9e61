//! Tests for the headless `--press` mode of the binary.

mod common;

use common::temp_config;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the binary against a config path that does not exist, so the
/// user's own config never leaks into the test.
fn tally(args: &[&str]) -> Output {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = dir.path().join("config.toml");
    Command::new(env!("CARGO_BIN_EXE_tally"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_empty_script_shows_zero() {
    let output = tally(&["--press", ""]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Hello World!\ncount: 0\n[ + ] [ - ]\n");
}

#[test]
fn test_plus_shows_one() {
    let output = tally(&["--press", "+"]);
    assert!(stdout(&output).contains("count: 1\n"));
}

#[test]
fn test_minus_shows_minus_one() {
    let output = tally(&["--press", "-"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("count: -1\n"));
}

#[test]
fn test_three_plus_one_minus_shows_two() {
    let output = tally(&["--press", "+++-"]);
    assert!(stdout(&output).contains("count: 2\n"));
}

#[test]
fn test_heading_override() {
    let output = tally(&["--heading", "Clicks", "--press", "+"]);
    assert!(stdout(&output).starts_with("Clicks\n"));
}

#[test]
fn test_json_format() {
    let output = tally(&["--press=--", "--format", "json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["count"], -2);
    assert_eq!(json["heading"], "Hello World!");
}

#[test]
fn test_unknown_control_exits_with_error() {
    let output = tally(&["--press", "+*"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Unknown control '*' at position 1"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 1\n");
    let output = Command::new(env!("CARGO_BIN_EXE_tally"))
        .arg("--config")
        .arg(&path)
        .args(["--press", "+"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tick_rate_ms"));
}

#[test]
fn test_heading_flag_overrides_blank_config_heading() {
    let (_dir, path) = temp_config("[ui]\nheading = \"\"\n");
    let output = Command::new(env!("CARGO_BIN_EXE_tally"))
        .arg("--config")
        .arg(&path)
        .args(["--heading", "Clicks", "--press", "+"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Clicks\ncount: 1\n[ + ] [ - ]\n");
}

#[test]
fn test_help_lists_press_option() {
    let output = tally(&["--help"]);
    let text = stdout(&output);
    assert!(text.contains("--press"));
    assert!(text.contains("--format"));
}
