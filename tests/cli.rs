use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary against an isolated data directory with `script` on stdin
fn run_with_stdin(temp_dir: &TempDir, script: impl Into<Vec<u8>>) -> assert_cmd::assert::Assert {
    let data_dir = temp_dir.path().join("data");
    let log_file = temp_dir.path().join("application.log");
    cargo_bin_cmd!("todo-ledger")
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--log-file")
        .arg(&log_file)
        .write_stdin(script)
        .assert()
}

#[test]
fn test_piped_registration_reaches_session_menu() {
    let temp_dir = TempDir::new().unwrap();

    run_with_stdin(&temp_dir, "1\nmail@gmail.com\nchipotle\nAbc12345!\n6\n3\n")
        .success()
        .stdout(predicate::str::contains("Welcome \"chipotle\""))
        .stdout(predicate::str::contains("cya"));

    let users = fs::read_to_string(temp_dir.path().join("data").join("users.csv")).unwrap();
    assert!(users.contains("mail@gmail.com,chipotle,pbkdf2$"));
}

#[test]
fn test_piped_login_after_restart() {
    let temp_dir = TempDir::new().unwrap();

    run_with_stdin(
        &temp_dir,
        "1\nmail@gmail.com\nchipotle\nAbc12345!\n1\nBuy milk\nsemi-skimmed\n02-06-2024\n6\n3\n",
    )
    .success();

    run_with_stdin(&temp_dir, "2\nchipotle\nAbc12345!\n2\n6\n3\n")
        .success()
        .stdout(predicate::str::contains("Welcome \"chipotle\""))
        .stdout(predicate::str::contains("Buy milk"));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();

    run_with_stdin(&temp_dir, "")
        .success()
        .stdout(predicate::str::contains("1.- Register"));
}

#[test]
fn test_tasks_are_saved_when_input_breaks() {
    let temp_dir = TempDir::new().unwrap();
    let mut script = b"1\nmail@gmail.com\nchipotle\nAbc12345!\n".to_vec();
    script.extend_from_slice(&[0xff, 0xfe, b'\n']);

    run_with_stdin(&temp_dir, script).failure();

    // The session ended on unreadable input, yet the exit save still ran
    assert!(temp_dir.path().join("data").join("users.csv").exists());
    assert!(temp_dir.path().join("data").join("tasks.csv").exists());
}
