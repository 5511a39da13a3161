//! Errors that abort an extraction run.
//!
//! Per-line and per-file problems on the input side are never errors: they
//! are skipped and logged. Only failures to produce output surface here.

use std::path::PathBuf;

/// Hard failures while writing extraction output.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Failed to create directory: {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to resolve directory: {path}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
