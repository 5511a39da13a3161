//! Classification of individual session log lines.
//!
//! Each line of a session log is an independent JSON object with an outer
//! `type` and a `payload`:
//!
//! ```text
//! {"type":"session_meta","payload":{"cwd":"/home/me/proj",...}}
//! {"type":"response_item","payload":{"type":"message","role":"user","content":[...]}}
//! ```
//!
//! Only the two shapes above are of interest. Everything else, including
//! lines that are not JSON at all, classifies as `None`.

use serde_json::Value;

use super::message::Role;

/// Outer `type` of the session metadata record.
pub const SESSION_META: &str = "session_meta";

/// Outer `type` of a conversation item record.
pub const RESPONSE_ITEM: &str = "response_item";

/// Payload `type` of a conversation turn.
const MESSAGE: &str = "message";

/// A recognized session log record.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Session metadata. `cwd` is `None` when the payload lacks a string `cwd`.
    SessionMeta { cwd: Option<String> },
    /// A user or assistant turn with its raw `content` field.
    Message { role: Role, content: Value },
}

impl Record {
    /// Classify a single line.
    ///
    /// Returns `None` for blank lines, invalid JSON, non-object values, and
    /// records of any other shape.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let mut value: Value = serde_json::from_str(line).ok()?;
        let row = value.as_object_mut()?;

        let kind = row.get("type")?.as_str()?.to_string();
        match kind.as_str() {
            SESSION_META => {
                let cwd = row
                    .get("payload")
                    .and_then(Value::as_object)
                    .and_then(|payload| payload.get("cwd"))
                    .and_then(Value::as_str)
                    .map(str::to_string);
                Some(Record::SessionMeta { cwd })
            }
            RESPONSE_ITEM => {
                let mut payload = row.remove("payload")?;
                let payload = payload.as_object_mut()?;
                if payload.get("type")?.as_str()? != MESSAGE {
                    return None;
                }
                let role = Role::from_field(payload.get("role")?.as_str()?)?;
                let content = payload.remove("content").unwrap_or(Value::Null);
                Some(Record::Message { role, content })
            }
            _ => None,
        }
    }
}
