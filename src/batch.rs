//! Partitioning transcripts into batch manifests.
//!
//! The transcript list is cut into at most `batches` contiguous slices of
//! `ceil(len / batches)` entries. Reading the manifests back in batch order
//! reproduces the original list exactly.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExtractError;

/// Default number of batch manifests.
pub const DEFAULT_BATCHES: usize = 5;

/// Subdirectory of the output directory that holds manifests.
pub const BATCHES_DIR: &str = "batches";

/// A manifest written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchManifest {
    /// Batch index used in the file name
    pub index: usize,
    /// Path of the manifest file
    pub path: PathBuf,
    /// Transcript paths listed in the manifest
    pub entries: Vec<PathBuf>,
}

/// Split `items` into at most `batches` contiguous, non-empty slices.
///
/// `batches` below 1 is treated as 1. Every slice except possibly the last
/// has `ceil(len / batches)` items; when there are too few items to fill
/// every batch, fewer slices are returned.
pub fn partition<T>(items: &[T], batches: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return Vec::new();
    }
    let chunk = chunk_size(items.len(), batches);
    items.chunks(chunk).collect()
}

/// Number of items per batch: `ceil(len / batches)`, at least 1.
pub fn chunk_size(len: usize, batches: usize) -> usize {
    let batches = batches.max(1);
    (len / batches + usize::from(len % batches != 0)).max(1)
}

/// Manifest file name for batch `index`.
pub fn manifest_file_name(index: usize) -> String {
    format!("batch_{}.txt", index)
}

/// Write one manifest per non-empty batch under `<output_dir>/batches/`.
///
/// The `batches` directory is created even when `paths` is empty; no
/// manifest files are written in that case.
///
/// # Errors
///
/// Fails if the directory or a manifest file cannot be written.
pub fn write_manifests(
    paths: &[PathBuf],
    output_dir: &Path,
    batches: usize,
) -> Result<Vec<BatchManifest>, ExtractError> {
    let batches_dir = output_dir.join(BATCHES_DIR);
    fs::create_dir_all(&batches_dir).map_err(|source| ExtractError::CreateDir {
        path: batches_dir.clone(),
        source,
    })?;

    let mut manifests = Vec::new();
    for (index, slice) in partition(paths, batches).into_iter().enumerate() {
        let path = batches_dir.join(manifest_file_name(index));
        let contents: String = slice
            .iter()
            .map(|p| format!("{}\n", p.display()))
            .collect();
        fs::write(&path, contents).map_err(|source| ExtractError::Write {
            path: path.clone(),
            source,
        })?;
        manifests.push(BatchManifest {
            index,
            path,
            entries: slice.to_vec(),
        });
    }

    Ok(manifests)
}
