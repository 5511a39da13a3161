//! End-to-end tests of the extraction pipeline through the library API

use super::helpers::{
    block_message_line, message_line, meta_line, scenario_tree, set_mtime, write_session,
};

use cxr::pipeline::{self, ExtractOptions};
use cxr::progress::ProgressReporter;
use cxr::selector::{select_sessions, SelectionFilter};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn options(root: &Path, out: &Path, batches: usize, filter: SelectionFilter) -> ExtractOptions {
    ExtractOptions {
        sessions_root: root.to_path_buf(),
        output_dir: out.to_path_buf(),
        batches,
        filter,
    }
}

fn manifest_entries(path: &Path) -> Vec<PathBuf> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(PathBuf::from)
        .collect()
}

#[test]
fn scenario_size_then_workspace_filtering() {
    let sessions = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    scenario_tree(sessions.path());

    let size_only = SelectionFilter {
        min_size: 100,
        ..SelectionFilter::default()
    };
    assert_eq!(select_sessions(sessions.path(), &size_only).len(), 2);

    let filter = SelectionFilter {
        min_size: 100,
        workspace: Some("/proj".to_string()),
        ..SelectionFilter::default()
    };
    let summary = pipeline::run(
        &options(sessions.path(), out.path(), 2, filter),
        &ProgressReporter::quiet(),
    )
    .unwrap();

    assert_eq!(summary.sessions_found, 1);
    assert_eq!(summary.exported.len(), 1);
    assert!(summary.exported[0].ends_with("000_proj.txt"));

    let transcript = fs::read_to_string(&summary.exported[0]).unwrap();
    assert_eq!(transcript, "[USER]: fifteen chars!!");

    assert_eq!(summary.manifests.len(), 1);
    let batches_dir = out.path().join("batches");
    assert_eq!(fs::read_dir(&batches_dir).unwrap().count(), 1);
    assert_eq!(
        manifest_entries(&batches_dir.join("batch_0.txt")),
        summary.exported
    );
}

#[test]
fn empty_sessions_keep_their_index() {
    let sessions = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let newest = write_session(
        sessions.path(),
        "newest.jsonl",
        &[message_line("user", "the newest session message")],
    );
    let silent = write_session(
        sessions.path(),
        "silent.jsonl",
        &[message_line("user", "short"), message_line("developer", "instructions for the agent")],
    );
    let oldest = write_session(
        sessions.path(),
        "oldest.jsonl",
        &[message_line("assistant", "the oldest session reply")],
    );
    set_mtime(&newest, 1_700_300_000);
    set_mtime(&silent, 1_700_200_000);
    set_mtime(&oldest, 1_700_100_000);

    let filter = SelectionFilter {
        min_size: 0,
        ..SelectionFilter::default()
    };
    let summary = pipeline::run(
        &options(sessions.path(), out.path(), 5, filter),
        &ProgressReporter::quiet(),
    )
    .unwrap();

    assert_eq!(summary.sessions_found, 3);
    let names: Vec<_> = summary
        .exported
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["000_newest.txt", "002_oldest.txt"]);

    for manifest in &summary.manifests {
        let entries = manifest_entries(&manifest.path);
        assert!(entries.iter().all(|p| !p.to_string_lossy().contains("silent")));
    }
}

#[test]
fn manifests_concatenate_to_export_list() {
    let sessions = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    for i in 0..7 {
        let path = write_session(
            sessions.path(),
            &format!("s{}.jsonl", i),
            &[message_line("user", &format!("question number {} for the agent", i))],
        );
        set_mtime(&path, 1_700_000_000 + i * 1000);
    }

    let filter = SelectionFilter {
        min_size: 0,
        ..SelectionFilter::default()
    };
    let summary = pipeline::run(
        &options(sessions.path(), out.path(), 3, filter),
        &ProgressReporter::quiet(),
    )
    .unwrap();

    assert_eq!(summary.exported.len(), 7);
    let sizes: Vec<_> = summary.manifests.iter().map(|m| m.entries.len()).collect();
    assert_eq!(sizes, vec![3, 3, 1]);

    let mut concatenated = Vec::new();
    for index in 0..summary.manifests.len() {
        let path = out.path().join("batches").join(format!("batch_{}.txt", index));
        concatenated.extend(manifest_entries(&path));
    }
    assert_eq!(concatenated, summary.exported);
    assert!(concatenated.iter().all(|p| p.is_absolute()));

    // Newest session first
    assert!(summary.exported[0].ends_with("000_s6.txt"));
}

#[test]
fn noise_and_short_units_never_reach_output() {
    let sessions = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    write_session(
        sessions.path(),
        "noisy.jsonl",
        &[
            meta_line("/proj"),
            block_message_line(
                "user",
                "input_text",
                &[
                    "# AGENTS.md instructions for /proj\n\nfollow the rules",
                    "<environment_context>\n  <cwd>/proj</cwd>\n</environment_context>",
                    "0123456789",
                    "   tiny    ",
                    "fix the flaky test please",
                ],
            ),
            block_message_line("assistant", "output_text", &["Fixed the flaky test."]),
        ],
    );

    let filter = SelectionFilter {
        min_size: 0,
        ..SelectionFilter::default()
    };
    let summary = pipeline::run(
        &options(sessions.path(), out.path(), 1, filter),
        &ProgressReporter::quiet(),
    )
    .unwrap();

    let transcript = fs::read_to_string(&summary.exported[0]).unwrap();
    insta::assert_snapshot!(transcript, @r"
    [USER]: fix the flaky test please

    [ASSISTANT]: Fixed the flaky test.
    ");
}

#[test]
fn long_messages_are_truncated() {
    let sessions = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let user_text = "u".repeat(4000);
    let assistant_text = "a".repeat(2000);

    write_session(
        sessions.path(),
        "long.jsonl",
        &[
            message_line("user", &user_text),
            message_line("assistant", &assistant_text),
        ],
    );

    let filter = SelectionFilter {
        min_size: 0,
        ..SelectionFilter::default()
    };
    let summary = pipeline::run(
        &options(sessions.path(), out.path(), 1, filter),
        &ProgressReporter::quiet(),
    )
    .unwrap();

    let transcript = fs::read_to_string(&summary.exported[0]).unwrap();
    let expected = format!(
        "[USER]: {}\n\n[ASSISTANT]: {}",
        "u".repeat(3000),
        "a".repeat(1200)
    );
    assert_eq!(transcript, expected);
}

#[test]
fn no_matching_sessions_writes_nothing() {
    let sessions = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    scenario_tree(sessions.path());

    let filter = SelectionFilter {
        min_size: 100,
        workspace: Some("/somewhere/else".to_string()),
        ..SelectionFilter::default()
    };
    let summary = pipeline::run(
        &options(sessions.path(), out.path(), 5, filter),
        &ProgressReporter::quiet(),
    )
    .unwrap();

    assert_eq!(summary.sessions_found, 0);
    assert!(summary.exported.is_empty());
    assert!(summary.manifests.is_empty());
    assert_eq!(fs::read_dir(out.path().join("batches")).unwrap().count(), 0);
}
