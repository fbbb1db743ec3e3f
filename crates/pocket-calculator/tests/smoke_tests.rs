//! Smoke tests for the pocket-calculator binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn pocket_calculator() -> Command {
    Command::cargo_bin("pocket-calculator").expect("pocket-calculator binary should exist")
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    pocket_calculator()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    pocket_calculator()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("replay"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn test_replay_requires_keys() {
    pocket_calculator().arg("replay").assert().failure();
}

// ============================================================================
// Replay Tests
// ============================================================================

#[test]
fn test_replay_addition() {
    pocket_calculator()
        .args(["replay", "3", "+", "4", "Enter"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_replay_chaining_with_key_runs() {
    pocket_calculator()
        .args(["replay", "5+3+2="])
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_replay_rounding() {
    pocket_calculator()
        .args(["replay", "1/3", "Enter"])
        .assert()
        .success()
        .stdout("0.33333333\n");
}

#[test]
fn test_replay_division_by_zero() {
    pocket_calculator()
        .args(["replay", "8", "/", "0", "Enter"])
        .assert()
        .success()
        .stdout("Erro: Divisão por zero\n");
}

#[test]
fn test_replay_minus_key() {
    pocket_calculator()
        .args(["replay", "9", "-", "12.5", "Enter"])
        .assert()
        .success()
        .stdout("-3.5\n");
}

#[test]
fn test_replay_backspace_cancels_operator() {
    pocket_calculator()
        .args(["replay", "9", "+", "Backspace"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_replay_transcript() {
    pocket_calculator()
        .args(["replay", "--transcript", "2", "*", "3", "Enter"])
        .assert()
        .success()
        .stdout("2\t2\n*\t2 * \n3\t2 * 3\nEnter\t6\n");
}

#[test]
fn test_replay_json() {
    let output = pocket_calculator()
        .args(["replay", "--format", "json", "7", "-"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let steps: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(steps[1]["display"], "7 - ");
    assert_eq!(steps[1]["state"]["pending"]["operand"], "7");
}

#[test]
fn test_unknown_keys_warn_on_stderr() {
    pocket_calculator()
        .args(["-v", "replay", "4", "Tab", "Enter"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("4\n")
        .stderr(predicate::str::contains("skipping unrecognized key"));
}

#[test]
fn test_quiet_suppresses_logs() {
    pocket_calculator()
        .args(["-q", "replay", "1", "/", "0", "Enter"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_replay_transcript_skips_ignored_keys() {
    pocket_calculator()
        .args(["replay", "--transcript", "5", "+", "*", "1", "Enter"])
        .assert()
        .success()
        .stdout("5\t5\n+\t5 + \n1\t5 + 1\nEnter\t6\n");
}

#[test]
fn test_replay_failed_chain_keeps_operator() {
    pocket_calculator()
        .args(["replay", "8", "/", "0", "+"])
        .assert()
        .success()
        .stdout(" + \n");
}
