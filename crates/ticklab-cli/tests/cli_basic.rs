//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "ticklab-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_age_adult() {
    let (stdout, _, code) = run_cli(&["age", "30"]);
    assert_eq!(code, 0, "Age check failed");
    assert!(stdout.contains("\"adult\""));
    assert!(stdout.contains("You are 30 years old"));
}

#[test]
fn test_age_invalid_input_exits_nonzero() {
    let (_, stderr, code) = run_cli(&["age", "abc"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Please enter a valid age!"));
}

#[test]
fn test_age_negative() {
    let (_, stderr, code) = run_cli(&["age", "--", "-5"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Age cannot be negative!"));
}

#[test]
fn test_price_default_tax() {
    let (stdout, _, code) = run_cli(&["price", "10"]);
    assert_eq!(code, 0, "Price calc failed");
    assert!(stdout.contains("$10.80"));
}

#[test]
fn test_price_with_quantity() {
    let (stdout, _, code) = run_cli(&["price", "5.50", "--quantity", "3"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("$17.82"));
}

#[test]
fn test_format() {
    let (stdout, _, code) = run_cli(&["format", "hELLO"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Hello!!!"));
}

#[test]
fn test_format_empty() {
    let (stdout, _, code) = run_cli(&["format"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Please provide some text!"));
}

#[test]
fn test_table_text() {
    let (stdout, _, code) = run_cli(&["table"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.contains("25"));
}

#[test]
fn test_table_json() {
    let (stdout, _, code) = run_cli(&["table", "--size", "3", "--json"]);
    assert_eq!(code, 0);
    let grid: Vec<Vec<String>> = serde_json::from_str(&stdout).expect("grid JSON");
    assert_eq!(grid.len(), 4);
    assert_eq!(grid[3][3], "9");
}

#[test]
fn test_countdown_preview() {
    let (stdout, _, code) = run_cli(&["countdown", "preview"]);
    assert_eq!(code, 0);
    let frames: Vec<serde_json::Value> = serde_json::from_str(&stdout).expect("frames JSON");
    assert_eq!(frames[0]["text"], "10");
    assert_eq!(frames.last().unwrap()["style"], "finished");
    assert!(stdout.contains("Time's up!"));
}

#[test]
fn test_countdown_preview_short() {
    let (stdout, _, code) = run_cli(&["countdown", "preview", "--from", "2"]);
    assert_eq!(code, 0);
    let frames: Vec<serde_json::Value> = serde_json::from_str(&stdout).expect("frames JSON");
    // 2, 1, 0, terminal message.
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[1]["style"], "warning");
}

#[test]
fn test_page_demo_deterministic() {
    let (first, _, code) = run_cli(&["page", "demo", "--seed", "7"]);
    assert_eq!(code, 0);
    let (second, _, _) = run_cli(&["page", "demo", "--seed", "7"]);
    // Timestamps differ; event payloads must not.
    let strip = |s: &str| {
        s.lines()
            .filter(|l| !l.contains("\"at\""))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_eq!(strip(&first), strip(&second));
}

#[test]
fn test_page_add_item() {
    let (stdout, _, code) = run_cli(&["page", "add-item", "--count", "2", "--seed", "1"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.matches("ItemAdded").count(), 2);
}
