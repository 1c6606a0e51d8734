//! Smoke tests for the keycalc CLI

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the keycalc binary
fn keycalc() -> Command {
    let mut cmd = Command::cargo_bin("keycalc").expect("keycalc binary should exist");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    keycalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    keycalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("keys"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_no_args_fails() {
    keycalc().assert().failure();
}

// ============================================================================
// run
// ============================================================================

#[test]
fn test_run_division() {
    keycalc()
        .args(["--color", "never", "run", "9/3="])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_run_chaining() {
    keycalc()
        .args(["--color", "never", "run", "5+3+2="])
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_run_division_by_zero() {
    keycalc()
        .args(["--color", "never", "run", "5/0="])
        .assert()
        .success()
        .stdout("Error\n");
}

#[test]
fn test_run_steps() {
    keycalc()
        .args(["--color", "never", "run", "45<", "--steps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEL -> 4"))
        .stdout(predicate::str::ends_with("4\n"));
}

#[test]
fn test_run_tape() {
    keycalc()
        .args(["--color", "never", "run", "8+2=c6*7=", "--tape"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8 + 2 = 10"))
        .stdout(predicate::str::contains("6 * 7 = 42"));
}

#[test]
fn test_run_json() {
    let output = keycalc()
        .args(["run", "8+2=7*", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["display"], "0");
    assert_eq!(json["pending"], "107 *");
    assert_eq!(json["tape"][0]["result"], "10");
}

#[test]
fn test_run_unknown_key_fails() {
    keycalc()
        .args(["run", "2^8="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn test_run_empty_script_fails() {
    keycalc()
        .args(["run", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

// ============================================================================
// keys
// ============================================================================

#[test]
fn test_keys_layout() {
    keycalc()
        .arg("keys")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEL"))
        .stdout(predicate::str::contains("="));
}

#[test]
fn test_keys_handlers() {
    keycalc()
        .args(["keys", "--handlers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("btn-equals"))
        .stdout(predicate::str::contains("appendOperator('+')"))
        .stdout(predicate::str::contains("deleteLast()"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_defaults() {
    keycalc()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("tape_capacity: 100"))
        .stdout(predicate::str::contains("error_policy: reset"));
}

#[test]
fn test_config_file_applies_to_run() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keycalc.yaml");
    fs::write(&path, "error_policy: legacy\n").unwrap();

    keycalc()
        .args(["--color", "never", "--config"])
        .arg(&path)
        .args(["run", "5/0=7"])
        .assert()
        .success()
        .stdout("Error7\n");

    keycalc()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("error_policy: legacy"));
}

#[test]
fn test_config_file_invalid_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keycalc.yaml");
    fs::write(&path, "max_input_len: 0\n").unwrap();

    keycalc()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_file_missing() {
    keycalc()
        .args(["--config", "/nonexistent/keycalc.yaml", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

// ============================================================================
// logging
// ============================================================================

#[test]
fn test_verbose_logs_to_stderr_only() {
    keycalc()
        .args(["-vv", "--color", "never", "run", "1+1="])
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::contains("operator recorded"));
}

#[test]
fn test_verbose_logs_show_targets() {
    keycalc()
        .args(["-vv", "--color", "never", "run", "1+1="])
        .assert()
        .success()
        .stderr(predicate::str::contains("keypad_calc::core::engine"));
}

#[test]
fn test_default_run_logs_nothing() {
    keycalc()
        .args(["--color", "never", "run", "1+1="])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_run_tape_after_error() {
    keycalc()
        .args(["--color", "never", "run", "5/0+1=", "--tape"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 / 0 = Error\nNaN + 1 = NaN"))
        .stdout(predicate::str::ends_with("NaN\n"));
}

#[test]
fn test_quiet_suppresses_logs() {
    keycalc()
        .args(["-q", "--color", "never", "run", "1/0="])
        .assert()
        .success()
        .stdout("Error\n")
        .stderr(predicate::str::is_empty());
}
