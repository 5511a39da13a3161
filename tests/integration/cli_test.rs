//! CLI tests
//!
//! Drives the actual cxr binary. HOME points at a scratch directory so a
//! developer's own config file never leaks into the results.

use super::helpers::{message_line, scenario_tree, write_session};

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Build a cxr command isolated from the user's environment.
fn cxr(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cxr").expect("Failed to find cxr binary");
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn scenario_end_to_end() {
    let home = TempDir::new().unwrap();
    let sessions = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    scenario_tree(sessions.path());

    let canonical_out = fs::canonicalize(out.path()).unwrap();
    cxr(&home)
        .arg(sessions.path())
        .arg(out.path())
        .args(["--workspace", "/proj", "--min-size", "100", "--batches", "2"])
        .assert()
        .success()
        .stdout(format!("{}\n", canonical_out.display()))
        .stderr(predicate::str::contains("Found 1 sessions\n"))
        .stderr(predicate::str::contains(
            "Extracted 1 conversations with content\n",
        ))
        .stderr(predicate::str::contains("Batch 0: 1 conversations\n"))
        .stderr(predicate::str::contains("Batch 1:").not());

    let transcript = fs::read_to_string(out.path().join("000_proj.txt")).unwrap();
    assert_eq!(transcript, "[USER]: fifteen chars!!");

    let manifest = fs::read_to_string(out.path().join("batches/batch_0.txt")).unwrap();
    assert_eq!(
        manifest,
        format!("{}\n", canonical_out.join("000_proj.txt").display())
    );
    assert!(!out.path().join("batches/batch_1.txt").exists());
}

#[test]
fn date_range_is_reported() {
    let home = TempDir::new().unwrap();
    let sessions = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    cxr(&home)
        .arg(sessions.path())
        .arg(out.path())
        .args(["--from", "2000-01-01", "--to", "2000-01-02"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Found 0 sessions (from 2000-01-01 to 2000-01-02)",
        ))
        .stderr(predicate::str::contains(
            "Extracted 0 conversations with content",
        ));
}

#[test]
fn missing_sessions_root_still_succeeds() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    cxr(&home)
        .arg(out.path().join("no-such-root"))
        .arg(out.path().join("result"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 0 sessions"));

    assert!(out.path().join("result").join("batches").is_dir());
}

#[test]
fn invalid_date_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    cxr(&home)
        .args(["/tmp", "/tmp/out", "--from", "2025-02-30"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn uncreatable_output_dir_fails() {
    let home = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    cxr(&home)
        .arg(temp.path())
        .arg(blocker.join("out"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to create directory"));
}

#[test]
fn config_file_supplies_defaults() {
    let home = TempDir::new().unwrap();
    let sessions = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let config_dir = home.path().join(".config").join("cxr");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[extract]\nbatches = 1\nmin_size = 0\n",
    )
    .unwrap();

    for i in 0..3 {
        write_session(
            sessions.path(),
            &format!("s{}.jsonl", i),
            &[message_line("user", "a small but valid question")],
        );
    }

    cxr(&home)
        .arg(sessions.path())
        .arg(out.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 3 sessions"))
        .stderr(predicate::str::contains("Batch 0: 3 conversations"));
}

#[test]
fn negative_batches_and_min_size_are_clamped() {
    let home = TempDir::new().unwrap();
    let sessions = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    for i in 0..3 {
        write_session(
            sessions.path(),
            &format!("s{}.jsonl", i),
            &[message_line("user", "a small but valid question")],
        );
    }

    cxr(&home)
        .arg(sessions.path())
        .arg(out.path())
        .args(["--batches=-2", "--min-size", "-1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 3 sessions"))
        .stderr(predicate::str::contains("Batch 0: 3 conversations"))
        .stderr(predicate::str::contains("Batch 1:").not());

    let batches: Vec<_> = fs::read_dir(out.path().join("batches"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(batches, vec![std::ffi::OsString::from("batch_0.txt")]);
}

#[test]
fn help_lists_all_options() {
    let home = TempDir::new().unwrap();
    cxr(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--batches"))
        .stdout(predicate::str::contains("--workspace"))
        .stdout(predicate::str::contains("--from"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--min-size"));
}
