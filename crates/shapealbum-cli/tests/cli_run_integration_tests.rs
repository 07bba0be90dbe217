//! CLI integration tests
//!
//! These tests run the built `shapealbum` binary against command files
//! written to a temp directory.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_script(temp_dir: &TempDir, contents: &str) -> PathBuf {
    let path = temp_dir.path().join("album.txt");
    fs::write(&path, contents).unwrap();
    path
}

fn shapealbum(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_shapealbum"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_cli_run_prints_snapshot_dump() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(
        &temp_dir,
        "shape R rectangle 200 200 50 100 255 0 0\nsnapshot Initial state\n",
    );

    let output = shapealbum(&["run", script.to_str().unwrap()]);

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Snapshot ID: "));
    assert!(stdout.contains(
        "Description: Initial state\nShape Information:\n"
    ));
    assert!(stdout.contains("Name: R\n"));
    assert!(stdout.contains("Min corner: (200.0,200.0), Width: 50.0"));
}

#[test]
fn test_cli_run_ids_format() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(&temp_dir, "# nothing but comments\n\n");

    let output = shapealbum(&["run", script.to_str().unwrap(), "--format", "ids"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");
}

#[test]
fn test_cli_run_json_format() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(&temp_dir, "shape O oval 5 5 10 20 0 0 255\nsnapshot json\n");

    let output = shapealbum(&["run", script.to_str().unwrap(), "--format", "json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"description\": \"json\""));
    assert!(stdout.contains("\"type\": \"oval\""));
}

#[test]
fn test_cli_run_halted_batch_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(&temp_dir, "snapshot ok\nmove X 1 2\nsnapshot never\n");

    let output = shapealbum(&["run", script.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: line 2 `move X 1 2`: Shape not found: X"),
        "unexpected stderr: {}",
        stderr
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_run_rejects_unknown_log_profile() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(&temp_dir, "snapshot\n");

    let path = script.to_str().unwrap();
    let output = shapealbum(&["run", path, "--log-profile", "verbose"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown logging profile"));
}

#[test]
fn test_cli_check_reports_count_and_errors() {
    let temp_dir = TempDir::new().unwrap();
    let good = write_script(&temp_dir, "shape R rectangle 0 0 1 1 0 0 0\nsnapshot\n");

    let output = shapealbum(&["check", good.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 commands"));

    let bad = write_script(&temp_dir, "snapshot\nresize R ten 1\n");
    let output = shapealbum(&["check", bad.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: line 2"));
}

#[test]
fn test_cli_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.txt");

    let output = shapealbum(&["run", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
}
