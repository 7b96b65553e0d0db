//! Integration tests for the venvup CLI skeleton
//!
//! These tests verify the CLI structure and argument parsing.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn venvup() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("venvup"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_reports_missing_subcommand_and_exits_two() {
    // subcommand_required makes clap print the short error on stderr
    venvup()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("requires a subcommand"));
}

#[test]
fn test_cli_help_flag_shows_help() {
    venvup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    venvup()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("venvup"));
}

#[test]
fn test_version_command_shows_version() {
    venvup()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("venvup 0.1.0"));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    venvup()
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""version":"0.1.0""#));
}

// --- Command hierarchy tests ---

#[test]
fn test_help_shows_up_command() {
    venvup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("up"));
}

#[test]
fn test_help_shows_status_command() {
    venvup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_help_shows_doctor_command() {
    venvup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("doctor"));
}

#[test]
fn test_help_shows_clean_command() {
    venvup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clean"));
}

// --- Global flags tests ---

#[test]
fn test_global_json_flag_accepted() {
    venvup()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""version":"#));
}

#[test]
fn test_global_quiet_flag_accepted() {
    venvup().args(["--quiet", "version"]).assert().success();
}

#[test]
fn test_global_no_color_flag_accepted() {
    venvup().args(["--no-color", "version"]).assert().success();
}

#[test]
fn test_no_color_env_var_accepted() {
    // NO_COLOR env var should be accepted with any truthy value
    venvup()
        .env("NO_COLOR", "true")
        .arg("version")
        .assert()
        .success();
}

#[test]
fn test_no_color_env_var_conventional_value_accepted() {
    // NO_COLOR=1 is the conventional form; it must never trip clap's
    // argument parsing.
    venvup()
        .env("NO_COLOR", "1")
        .arg("version")
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid value").not());
}

// --- Error handling tests ---

#[test]
fn test_unknown_command_exits_with_error() {
    venvup()
        .arg("nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// --- Subcommand argument tests ---

#[test]
fn test_up_dir_flag_is_accepted() {
    // --dir is a valid flag; outcome depends on the host interpreter
    venvup()
        .args(["up", "--dir", "some-env", "--python", "/nonexistent-python"])
        .assert()
        .stderr(predicate::str::contains("unrecognized").not());
}

#[test]
fn test_status_accepts_dir_flag() {
    let tmp = tempfile::tempdir().expect("temp dir");
    venvup()
        .current_dir(tmp.path())
        .args(["status", "--dir", "elsewhere"])
        .assert()
        .success();
}
