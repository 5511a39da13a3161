//! Writing one transcript file per selected session.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ExtractError;
use crate::session::{reader, Message, SessionRecord};

/// Separator placed between rendered messages in a transcript.
pub const MESSAGE_SEPARATOR: &str = "\n\n";

/// Build the transcript file name for the candidate at `index`.
///
/// The index is the session's position in the selected list, zero-padded to
/// three digits, so skipped sessions leave gaps rather than shifting names.
pub fn export_file_name(index: usize, stem: &str) -> String {
    format!("{:03}_{}.txt", index, stem)
}

/// Join rendered messages into transcript text.
pub fn render_transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(Message::to_string)
        .collect::<Vec<_>>()
        .join(MESSAGE_SEPARATOR)
}

/// Create `dir` (and parents) and return its absolute, canonical form.
pub fn ensure_output_dir(dir: &Path) -> Result<PathBuf, ExtractError> {
    fs::create_dir_all(dir).map_err(|source| ExtractError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    fs::canonicalize(dir).map_err(|source| ExtractError::Resolve {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write a transcript for every session that yields at least one message.
///
/// Sessions that cannot be read or have no accepted messages are skipped and
/// do not get a file. Returns the absolute paths of the written transcripts
/// in candidate order.
///
/// # Errors
///
/// Fails if the output directory cannot be created or a transcript cannot
/// be written.
pub fn export_conversations(
    sessions: &[SessionRecord],
    output_dir: &Path,
) -> Result<Vec<PathBuf>, ExtractError> {
    let output_dir = ensure_output_dir(output_dir)?;
    let mut exported = Vec::new();

    for (index, session) in sessions.iter().enumerate() {
        let messages = match reader::read_messages(&session.path) {
            Ok(messages) => messages,
            Err(e) => {
                debug!(path = %session.path.display(), error = %e, "cannot read session");
                continue;
            }
        };
        if messages.is_empty() {
            debug!(path = %session.path.display(), "no messages");
            continue;
        }

        let out_path = output_dir.join(export_file_name(index, &session.stem()));
        fs::write(&out_path, render_transcript(&messages)).map_err(|source| {
            ExtractError::Write {
                path: out_path.clone(),
                source,
            }
        })?;
        info!(path = %out_path.display(), messages = messages.len(), "exported");
        exported.push(out_path);
    }

    Ok(exported)
}
