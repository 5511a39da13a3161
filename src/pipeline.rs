//! End-to-end extraction: select, export, batch.

use std::path::PathBuf;

use tracing::info;

use crate::batch::{self, BatchManifest};
use crate::error::ExtractError;
use crate::export;
use crate::progress::ProgressReporter;
use crate::selector::{self, SelectionFilter};

/// Everything needed for one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Directory searched recursively for session logs
    pub sessions_root: PathBuf,
    /// Directory receiving transcripts and the `batches/` manifests
    pub output_dir: PathBuf,
    /// Requested number of batch manifests
    pub batches: usize,
    pub filter: SelectionFilter,
}

/// Outcome of an extraction run.
#[derive(Debug, Clone)]
pub struct ExtractSummary {
    /// Canonical output directory
    pub output_dir: PathBuf,
    /// Number of sessions that passed selection
    pub sessions_found: usize,
    /// Transcript paths in export order
    pub exported: Vec<PathBuf>,
    pub manifests: Vec<BatchManifest>,
}

/// Run the full pipeline.
///
/// # Errors
///
/// Fails only when output cannot be written; unreadable or malformed
/// sessions are skipped.
pub fn run(
    options: &ExtractOptions,
    progress: &ProgressReporter,
) -> Result<ExtractSummary, ExtractError> {
    let output_dir = export::ensure_output_dir(&options.output_dir)?;

    let sessions = selector::select_sessions(&options.sessions_root, &options.filter);
    progress.sessions_found(sessions.len(), &options.filter.date_description());

    let exported = export::export_conversations(&sessions, &output_dir)?;
    progress.conversations_extracted(exported.len());

    let batches = options.batches.max(1);
    let manifests = batch::write_manifests(&exported, &output_dir, batches)?;
    for manifest in &manifests {
        progress.batch_written(manifest.index, manifest.entries.len());
    }

    info!(
        sessions = sessions.len(),
        exported = exported.len(),
        manifests = manifests.len(),
        "extraction complete"
    );

    Ok(ExtractSummary {
        output_dir,
        sessions_found: sessions.len(),
        exported,
        manifests,
    })
}
