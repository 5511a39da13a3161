//! Streaming, tolerant reading of session log files.
//!
//! Session logs are arbitrary historical files, so reading never fails on
//! content: invalid UTF-8 is replaced, malformed lines are skipped, and
//! unrecognized records are ignored. Only I/O errors are reported.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::trace;

use super::message::{self, Message};
use super::record::Record;

/// Iterate over the records of a reader, skipping everything unrecognized.
///
/// Each line is decoded with lossy UTF-8 so a single bad byte sequence does
/// not cost the rest of the file. Stops at the first read error, which is
/// yielded as `Err`.
pub fn records<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<Record>> {
    LossyLines {
        reader,
        buf: Vec::new(),
        line_num: 0,
        done: false,
    }
    .filter_map(|line| match line {
        Ok((line_num, line)) => {
            let record = Record::from_line(&line);
            if record.is_none() {
                trace!(line_num, "skipping unrecognized line");
            }
            record.map(Ok)
        }
        Err(e) => Some(Err(e)),
    })
}

/// Return the working directory recorded in a session's metadata.
///
/// Stops at the first `session_meta` record. Returns `None` if there is none,
/// if that record carries no string `cwd`, or if the file cannot be read.
pub fn probe_cwd(path: &Path) -> Option<String> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            trace!(path = %path.display(), error = %e, "cannot open session for metadata");
            return None;
        }
    };
    probe_cwd_from_reader(BufReader::new(file))
}

/// Reader form of [`probe_cwd`].
pub fn probe_cwd_from_reader<R: BufRead>(reader: R) -> Option<String> {
    for record in records(reader) {
        match record {
            Ok(Record::SessionMeta { cwd }) => return cwd,
            Ok(_) => continue,
            Err(_) => return None,
        }
    }
    None
}

/// Extract every accepted message of a session, in file order.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_messages(path: &Path) -> io::Result<Vec<Message>> {
    let file = File::open(path)?;
    read_messages_from_reader(BufReader::new(file))
}

/// Reader form of [`read_messages`].
pub fn read_messages_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<Message>> {
    let mut messages = Vec::new();
    for record in records(reader) {
        if let Record::Message { role, content } = record? {
            messages.extend(message::extract(role, &content));
        }
    }
    Ok(messages)
}

/// Line iterator that tolerates invalid UTF-8.
struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
    line_num: usize,
    done: bool,
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.line_num += 1;
                let line = String::from_utf8_lossy(&self.buf).into_owned();
                Some(Ok((self.line_num, line)))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
