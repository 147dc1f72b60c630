//! Focused CLI argument parsing tests.
//!
//! Tests that verify command-line argument parsing without starting an
//! interactive session.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;

fn hanoi() -> Command {
    let mut cmd = Command::cargo_bin("hanoi").unwrap();
    cmd.env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", "/nonexistent/hanoi-test-config");
    cmd
}

// ============================================================================
// Top Level
// ============================================================================

#[test]
fn version_command_succeeds() {
    hanoi()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hanoi"));
}

#[test]
fn version_flag_shows_version() {
    hanoi()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hanoi"));
}

#[test]
fn help_flag_shows_usage() {
    hanoi()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tower of Hanoi"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("solve"));
}

#[test]
fn missing_subcommand_fails() {
    hanoi().assert().failure();
}

#[test]
fn unknown_subcommand_fails() {
    hanoi()
        .arg("stack")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ============================================================================
// Value Parsing
// ============================================================================

#[test]
fn solve_rejects_zero_disks() {
    hanoi()
        .args(["solve", "--disks", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn solve_rejects_non_numeric_disks() {
    hanoi()
        .args(["solve", "--disks", "three"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn solve_rejects_unknown_peg() {
    hanoi()
        .args(["solve", "--disks", "3", "--to", "D"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn solve_rejects_unknown_format() {
    hanoi()
        .args(["solve", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn peg_names_are_case_insensitive() {
    hanoi()
        .args(["solve", "--disks", "1", "--to", "b", "--summary"])
        .assert()
        .success();
}

#[test]
fn solve_help_shows_options() {
    hanoi()
        .args(["solve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--disks"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--summary"));
}

#[test]
fn config_requires_subcommand() {
    hanoi().arg("config").assert().failure();
}
