// Rust guideline compliant 2026-02-09

//! Regression tests for the `jdki` binary: exit codes and global flags.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const ISSUES: &str = "Title: [JDK-8000001] Crash in C2 compiler
Priority: P2
Type: Bug
Component: hotspot
OS: windows
";

fn jdki(temp_dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jdki"))
        .current_dir(temp_dir.path())
        .env("NO_COLOR", "1")
        .args(args)
        .output()
        .expect("run jdki")
}

fn setup() -> TempDir {
    let temp_dir = TempDir::new().expect("temp dir");
    fs::write(temp_dir.path().join("issues.txt"), ISSUES).expect("write issues");
    temp_dir
}

#[test]
fn jdki_search_json_flag_outputs_json() {
    let temp_dir = setup();
    let output = jdki(&temp_dir, &["search", "-f", "issues.txt", "-p", "p2", "--json"]);

    assert!(
        output.status.success(),
        "expected success, got status: {:?}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["result"]["total"], 1);
}

#[test]
fn jdki_search_without_criteria_exits_one() {
    let temp_dir = setup();
    let output = jdki(&temp_dir, &["search", "-f", "issues.txt"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No search criteria given"), "stderr: {stderr}");
}

#[test]
fn jdki_zero_results_is_success() {
    let temp_dir = setup();
    let output = jdki(&temp_dir, &["search", "-f", "issues.txt", "-s", "nothing-like-this"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No matching issues found."));
}

#[test]
fn jdki_config_file_sets_output_format() {
    let temp_dir = setup();
    fs::write(
        temp_dir.path().join("jdki.toml"),
        "output_format = \"plain\"\ndefault_files = [\"issues.txt\"]\n",
    )
    .expect("write config");

    let output = jdki(&temp_dir, &["stats"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("issues.txt\ttotal\t1"), "stdout: {stdout}");
}

#[test]
fn jdki_missing_config_path_fails_with_json_error() {
    let temp_dir = setup();
    let output = jdki(
        &temp_dir,
        &["stats", "-f", "issues.txt", "--config", "absent.toml", "--json"],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let value: serde_json::Value = serde_json::from_str(stderr.trim()).expect("JSON error");
    assert_eq!(value["code"], "not_found");
}

#[test]
fn jdki_reports_each_load_failure_once() {
    let temp_dir = setup();
    let output = jdki(
        &temp_dir,
        &["search", "-f", "missing.txt", "issues.txt", "-p", "P2"],
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("failed to load").count(), 1, "stderr: {stderr}");
    assert!(stderr.contains("missing.txt"));
}
