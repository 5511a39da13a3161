//! Codex session logs: discovery records, line classification, and message
//! extraction.

pub mod message;
pub mod reader;
pub mod record;

use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDate};

pub use message::{Message, Role};
pub use record::Record;

/// A session log file that passed selection.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub path: PathBuf,
    pub size: u64,
    pub modified: SystemTime,
    /// Working directory from the first `session_meta` record, if any
    pub cwd: Option<String>,
}

impl SessionRecord {
    /// Local calendar date of the last modification.
    pub fn modified_date(&self) -> NaiveDate {
        local_date(self.modified)
    }

    /// File name without the `.jsonl` extension.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Convert a filesystem timestamp to a local calendar date.
pub fn local_date(time: SystemTime) -> NaiveDate {
    let local: DateTime<Local> = time.into();
    local.date_naive()
}
