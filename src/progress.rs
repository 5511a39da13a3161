//! Progress reporting for extraction runs.
//!
//! Progress lines go to stderr so stdout carries only the final output
//! directory path.

/// Reports run progress on stderr.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    /// Whether to show output (disabled for library callers and tests)
    show_output: bool,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    /// Create a reporter that writes to stderr.
    pub fn new() -> Self {
        Self { show_output: true }
    }

    /// Create a reporter with output disabled.
    pub fn quiet() -> Self {
        Self { show_output: false }
    }

    /// Report how many sessions passed selection.
    pub fn sessions_found(&self, count: usize, date_description: &str) {
        if self.show_output {
            eprintln!("{}", found_line(count, date_description));
        }
    }

    /// Report how many transcripts were written.
    pub fn conversations_extracted(&self, count: usize) {
        if self.show_output {
            eprintln!("{}", extracted_line(count));
        }
    }

    /// Report one written batch manifest.
    pub fn batch_written(&self, index: usize, entries: usize) {
        if self.show_output {
            eprintln!("{}", batch_line(index, entries));
        }
    }
}

fn found_line(count: usize, date_description: &str) -> String {
    format!("Found {} sessions{}", count, date_description)
}

fn extracted_line(count: usize) -> String {
    format!("Extracted {} conversations with content", count)
}

fn batch_line(index: usize, entries: usize) -> String {
    format!("Batch {}: {} conversations", index, entries)
}
