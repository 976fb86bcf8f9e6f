//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "dayplan-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn agenda_show_seed_day() {
    let (stdout, _, code) = run_cli(&["agenda", "show", "--day", "2024-02-08"]);
    assert_eq!(code, 0, "agenda show failed");
    assert!(stdout.contains("Meeting"));
    assert!(stdout.contains("Icon set"));
    assert!(stdout.contains("Prototype"));
}

#[test]
fn agenda_show_empty_day() {
    let (stdout, _, code) = run_cli(&["agenda", "show", "--day", "2024-03-01"]);
    assert_eq!(code, 0, "agenda show failed");
    assert!(stdout.contains("No tasks found"));
}

#[test]
fn agenda_show_json_snapshot() {
    let (stdout, _, code) = run_cli(&["agenda", "show", "--day", "2024-02-08", "--json"]);
    assert_eq!(code, 0, "agenda show --json failed");

    let snapshot: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON snapshot");
    assert_eq!(snapshot["reference_day"], "2024-02-08");
    assert_eq!(snapshot["tasks"].as_array().map(Vec::len), Some(3));
}

#[test]
fn agenda_week_has_seven_days() {
    let (stdout, _, code) = run_cli(&["agenda", "week", "--json"]);
    assert_eq!(code, 0, "agenda week failed");

    let week: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON week");
    assert_eq!(week.as_array().map(Vec::len), Some(7));
}

#[test]
fn agenda_show_rejects_malformed_day() {
    let (_, _, code) = run_cli(&["agenda", "show", "--day", "not-a-date"]);
    assert_ne!(code, 0);
}

#[test]
fn config_show_lists_first_weekday() {
    let (stdout, _, code) = run_cli(&["config", "show"]);
    assert_eq!(code, 0, "config show failed");
    assert!(stdout.contains("first_weekday"));
}
