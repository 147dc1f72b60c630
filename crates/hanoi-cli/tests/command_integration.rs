//! Integration tests for CLI commands.
//!
//! Every test runs inside its own temporary directory so project
//! configuration files never leak between tests.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn hanoi(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hanoi").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env_remove("HANOI_GAME__DISKS")
        .env_remove("HANOI_GAME__TARGET");
    cmd
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout should be JSON")
}

// ============================================================================
// Solve
// ============================================================================

#[test]
fn solve_prints_table_and_summary() {
    let temp = TempDir::new().unwrap();

    hanoi(&temp)
        .args(["solve", "--disks", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step"))
        .stdout(predicate::str::contains("Disk"))
        .stdout(predicate::str::contains("Moves (2^n - 1)"))
        .stdout(predicate::str::contains("7"));
}

#[test]
fn solve_json_lists_optimal_moves() {
    let temp = TempDir::new().unwrap();
    let listing = json_stdout(hanoi(&temp).args(["solve", "--disks", "3", "--format", "json"]));

    assert_eq!(listing["disks"], 3);
    assert_eq!(listing["source"], "A");
    assert_eq!(listing["target"], "C");
    assert_eq!(listing["total"], 7);

    let steps = listing["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 7);
    assert_eq!(
        steps[0],
        serde_json::json!({ "step": 1, "disk": 1, "from": "A", "to": "C" })
    );
    assert_eq!(
        steps[3],
        serde_json::json!({ "step": 4, "disk": 3, "from": "A", "to": "C" })
    );
}

#[test]
fn solve_to_middle_tower() {
    let temp = TempDir::new().unwrap();
    let listing = json_stdout(hanoi(&temp).args([
        "solve", "--disks", "2", "--to", "B", "--format", "json",
    ]));

    let moves: Vec<(String, String)> = listing["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["from"].to_string(), s["to"].to_string()))
        .collect();
    assert_eq!(
        moves,
        vec![
            ("\"A\"".to_string(), "\"C\"".to_string()),
            ("\"A\"".to_string(), "\"B\"".to_string()),
            ("\"C\"".to_string(), "\"B\"".to_string()),
        ]
    );
}

#[test]
fn solve_to_start_tower_fails() {
    let temp = TempDir::new().unwrap();

    hanoi(&temp)
        .args(["solve", "--disks", "2", "--to", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be the target"));
}

#[test]
fn solve_summary_handles_large_puzzles() {
    let temp = TempDir::new().unwrap();
    let listing = json_stdout(hanoi(&temp).args([
        "solve", "--disks", "30", "--summary", "--format", "json",
    ]));

    assert_eq!(listing["total"], 1_073_741_823_u64);
    assert!(listing.get("steps").is_none());
}

#[test]
fn solve_refuses_to_list_huge_solutions() {
    let temp = TempDir::new().unwrap();

    hanoi(&temp)
        .args(["solve", "--disks", "25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--summary"));
}

#[test]
fn solve_defaults_to_project_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("hanoi.toml"), "[game]\ndisks = 4\ntarget = \"B\"\n").unwrap();

    let listing = json_stdout(hanoi(&temp).args(["solve", "--format", "json"]));
    assert_eq!(listing["disks"], 4);
    assert_eq!(listing["target"], "B");
    assert_eq!(listing["total"], 15);
}

#[test]
fn environment_overrides_project_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("hanoi.toml"), "[game]\ndisks = 4\n").unwrap();

    let listing = json_stdout(
        hanoi(&temp)
            .env("HANOI_GAME__DISKS", "5")
            .args(["solve", "--format", "json"]),
    );
    assert_eq!(listing["total"], 31);
}

#[test]
fn lowercase_target_is_accepted_from_file_and_environment() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("hanoi.toml"), "[game]\ntarget = \"b\"\n").unwrap();

    let listing = json_stdout(hanoi(&temp).args(["solve", "--disks", "2", "--format", "json"]));
    assert_eq!(listing["target"], "B");

    let listing = json_stdout(
        hanoi(&temp)
            .env("HANOI_GAME__TARGET", "c")
            .args(["solve", "--disks", "2", "--format", "json"]),
    );
    assert_eq!(listing["target"], "C");
}

#[test]
fn invalid_project_config_is_reported() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("hanoi.toml"), "[game]\ndisks = 0\n").unwrap();

    hanoi(&temp)
        .arg("solve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

// ============================================================================
// Play
// ============================================================================

#[test]
fn play_win_by_hand() {
    let temp = TempDir::new().unwrap();

    hanoi(&temp)
        .args(["play", "--disks", "2"])
        .write_stdin("a b\na c\nb c\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("TOWER OF HANOI"))
        .stdout(predicate::str::contains("Congratulations!"))
        .stdout(predicate::str::contains("That is the optimal solution."))
        .stdout(predicate::str::contains("Thanks for playing!"));
}

#[test]
fn play_reports_illegal_moves() {
    let temp = TempDir::new().unwrap();

    hanoi(&temp)
        .args(["play", "--disks", "3"])
        .write_stdin("c a\na b\na b\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid move! tower C is empty"))
        .stdout(predicate::str::contains(
            "Invalid move! disk 2 cannot be placed on smaller disk 1",
        ))
        .stdout(predicate::str::contains("Moves: 1"));
}

#[test]
fn play_auto_solve() {
    let temp = TempDir::new().unwrap();

    hanoi(&temp)
        .args(["play", "--disks", "3"])
        .write_stdin("solve\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Solution complete in 7 moves!"));
}

#[test]
fn play_prompts_for_disk_count() {
    let temp = TempDir::new().unwrap();

    hanoi(&temp)
        .arg("play")
        .write_stdin("8\n1\na c\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("How many disks? (1-7)"))
        .stdout(predicate::str::contains("Invalid number!"))
        .stdout(predicate::str::contains("rebuilt the tower in 1 moves"));
}

#[test]
fn play_end_of_input_exits_cleanly() {
    let temp = TempDir::new().unwrap();

    hanoi(&temp)
        .args(["play", "--disks", "3"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thanks for playing!"));
}

#[test]
fn play_rejects_disks_above_configured_max() {
    let temp = TempDir::new().unwrap();

    hanoi(&temp)
        .args(["play", "--disks", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("game.max_disks"));
}

#[test]
fn play_rejects_start_as_target() {
    let temp = TempDir::new().unwrap();

    hanoi(&temp)
        .args(["play", "--disks", "3", "--to", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be the target"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_show_text() {
    let temp = TempDir::new().unwrap();

    hanoi(&temp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hanoi Configuration"))
        .stdout(predicate::str::contains("Max disks: 7"));
}

#[test]
fn config_show_toml_reflects_project_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("hanoi.toml"), "[display]\nbanner = false\n").unwrap();

    hanoi(&temp)
        .args(["config", "show", "--format", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[game]"))
        .stdout(predicate::str::contains("banner = false"));
}

#[test]
fn config_show_json() {
    let temp = TempDir::new().unwrap();
    let config = json_stdout(hanoi(&temp).args(["config", "show", "--format", "json"]));

    assert_eq!(config["game"]["disks"], 3);
    assert_eq!(config["game"]["target"], "C");
    assert_eq!(config["display"]["color"], true);
}

#[test]
fn config_validate_accepts_valid_project() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("hanoi.toml"), "[game]\ndisks = 5\n").unwrap();

    hanoi(&temp)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_rejects_invalid_project() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("hanoi.toml"), "[game]\ntarget = \"A\"\n").unwrap();

    hanoi(&temp)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration validation failed"));
}

#[test]
fn config_validate_single_file() {
    let temp = TempDir::new().unwrap();
    let broken = temp.path().join("broken.toml");
    fs::write(&broken, "[game\n").unwrap();

    hanoi(&temp)
        .args(["config", "validate", "--file", broken.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid configuration"));
}

#[test]
fn no_color_output_has_no_escape_codes() {
    let temp = TempDir::new().unwrap();

    hanoi(&temp)
        .args(["--no-color", "solve", "--disks", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}
