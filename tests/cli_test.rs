//! End-to-end tests for the `crackers` binary.

use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

const BIN: &str = env!("CARGO_BIN_EXE_crackers");

fn crackers(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env_remove("CRACKERS_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("run crackers")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn solve_prints_reconstructed_number() {
    let output = crackers(&["solve", "--max-n", "6", "yes", "no", "yes", "no", "no", "yes"]);
    assert!(output.status.success(), "solve failed: {:?}", output);
    assert_eq!(stdout(&output).trim(), "37");
}

#[test]
fn solve_uses_default_range() {
    let output = crackers(&["solve", "n", "n", "n", "n", "n", "y"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "32");
}

#[test]
fn solve_rejects_disallowed_range() {
    let output = crackers(&["solve", "--max-n", "9", "yes"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn solve_rejects_invalid_token() {
    let output = crackers(&["solve", "--max-n", "4", "yes", "no", "maybe", "no"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("maybe"), "stderr: {}", stderr);
}

#[test]
fn solve_rejects_wrong_answer_count() {
    let output = crackers(&["solve", "--max-n", "4", "yes", "no"]);
    assert!(!output.status.success());
}

#[test]
fn cards_prints_every_card() {
    let output = crackers(&["cards", "--max-n", "4"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Card 1:"));
    assert!(text.contains("Card 4:"));
    assert!(!text.contains("Card 5:"));
}

#[test]
fn cards_markdown_format() {
    let output = crackers(&["cards", "--max-n", "4", "--format", "markdown"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("| --- |"));
    assert!(text.contains("| 8 | 9 | 10 | 11 | 12 | 13 | 14 | 15 |"));
}

#[test]
fn step_chains_through_json_state() {
    let output = crackers(&["step", "start"]);
    assert!(output.status.success());
    let view: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json view");
    assert_eq!(view["phase"], "questioning");
    assert_eq!(view["state"]["stage"], 1);

    let state = view["state"].to_string();
    let output = crackers(&["step", "--state", &state, "yes"]);
    assert!(output.status.success());
    let view: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json view");
    assert_eq!(view["state"]["stage"], 2);
    assert_eq!(view["state"]["guess"], 1);
}

#[test]
fn step_rejects_invalid_trigger_for_phase() {
    let output = crackers(&["step", "yes"]);
    assert!(!output.status.success());
}

#[test]
fn config_file_changes_allowed_ranges() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("crackers.toml");
    fs::write(&config_path, "default_max_n = 3\nallowed_max_n = [2, 3]\n").expect("write config");

    let config = config_path.to_str().unwrap();
    let output = crackers(&["--config", config, "solve", "y", "y", "y"]);
    assert!(output.status.success(), "solve failed: {:?}", output);
    assert_eq!(stdout(&output).trim(), "7");

    let output = crackers(&["--config", config, "solve", "--max-n", "6", "y", "y", "y", "y", "y", "y"]);
    assert!(!output.status.success());
}

#[test]
fn about_mentions_range() {
    let output = crackers(&["about"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("between 1 and 63"));
    assert!(text.contains("For more"));
}
