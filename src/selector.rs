//! Discovery and filtering of session log files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::session::{local_date, reader, SessionRecord};
use crate::workspace::WorkspaceFilter;

/// File extension of Codex session logs.
pub const SESSION_EXTENSION: &str = "jsonl";

/// Default minimum file size in bytes.
pub const DEFAULT_MIN_SIZE: u64 = 500;

/// Criteria a session log must meet to be selected.
#[derive(Debug, Clone)]
pub struct SelectionFilter {
    /// Files smaller than this many bytes are skipped
    pub min_size: u64,
    /// Inclusive lower bound on the local modification date
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the local modification date
    pub to: Option<NaiveDate>,
    /// Keep only sessions whose cwd is this path or beneath it
    pub workspace: Option<String>,
}

impl Default for SelectionFilter {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            from: None,
            to: None,
            workspace: None,
        }
    }
}

impl SelectionFilter {
    /// Check a modification date against the `[from, to]` window.
    pub fn date_in_range(&self, date: NaiveDate) -> bool {
        if self.from.is_some_and(|from| date < from) {
            return false;
        }
        if self.to.is_some_and(|to| date > to) {
            return false;
        }
        true
    }

    /// Human-readable suffix describing the date window, e.g. ` (from 2025-01-01)`.
    pub fn date_description(&self) -> String {
        match (self.from, self.to) {
            (Some(from), Some(to)) => format!(" (from {} to {})", from, to),
            (Some(from), None) => format!(" (from {})", from),
            (None, Some(to)) => format!(" (to {})", to),
            (None, None) => String::new(),
        }
    }
}

/// Find every session log under `root` that passes `filter`.
///
/// The walk visits entries in file-name order and the result is sorted by
/// modification time, newest first, with a stable sort so that ties keep
/// the walk order. Entries that cannot be read or stat'ed are skipped.
pub fn select_sessions(root: &Path, filter: &SelectionFilter) -> Vec<SessionRecord> {
    if !root.exists() {
        warn!(root = %root.display(), "sessions root does not exist");
        return Vec::new();
    }

    let workspace = WorkspaceFilter::new(filter.workspace.as_deref());
    let mut sessions = Vec::new();

    let walker = WalkDir::new(root).sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let path = entry.path();
        if !path
            .extension()
            .is_some_and(|ext| ext == SESSION_EXTENSION)
        {
            continue;
        }

        // Follows symlinks, so a linked session log counts as a file.
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "cannot stat session");
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }

        let size = metadata.len();
        if size < filter.min_size {
            debug!(path = %path.display(), size, "below minimum size");
            continue;
        }

        let modified = match metadata.modified() {
            Ok(modified) => modified,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no modification time");
                continue;
            }
        };
        if !filter.date_in_range(local_date(modified)) {
            debug!(path = %path.display(), "outside date range");
            continue;
        }

        let cwd = reader::probe_cwd(path);
        if !workspace.matches(cwd.as_deref()) {
            debug!(path = %path.display(), cwd = ?cwd, "outside workspace");
            continue;
        }

        sessions.push(SessionRecord {
            path: path.to_path_buf(),
            size,
            modified,
            cwd,
        });
    }

    sort_newest_first(&mut sessions);
    sessions
}

/// Sort by modification time, newest first. Stable, so ties keep their order.
pub fn sort_newest_first(sessions: &mut [SessionRecord]) {
    sessions.sort_by(|a, b| b.modified.cmp(&a.modified));
}
