//! Conversation messages extracted from session logs.
//!
//! A message payload's `content` is either a plain string or a list of typed
//! content blocks. Each text unit found there is trimmed, filtered for
//! scaffolding noise, truncated per role, and rendered with a role tag.

use std::fmt;

use serde_json::Value;

/// Text units with this many characters or fewer (after trimming) are dropped.
pub const MIN_TEXT_CHARS: usize = 10;

/// Maximum characters kept from a user message.
pub const USER_MAX_CHARS: usize = 3000;

/// Maximum characters kept from an assistant message.
pub const ASSISTANT_MAX_CHARS: usize = 1200;

/// Prefixes of injected scaffolding that is not part of the conversation.
const NOISE_PREFIXES: &[&str] = &["<environment_context>", "# AGENTS.md instructions"];

/// Content block types that carry conversational text.
const TEXT_BLOCK_TYPES: &[&str] = &["input_text", "output_text", "text"];

/// Speaker of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Parse the `role` field of a message payload.
    ///
    /// Returns `None` for roles that are not part of the conversation
    /// (`system`, `developer`, tool roles, ...).
    pub fn from_field(role: &str) -> Option<Self> {
        match role {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }

    /// Tag used when rendering a message.
    pub fn tag(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Assistant => "ASSISTANT",
        }
    }

    /// Character limit applied to this role's text.
    pub fn max_chars(&self) -> usize {
        match self {
            Role::User => USER_MAX_CHARS,
            Role::Assistant => ASSISTANT_MAX_CHARS,
        }
    }
}

/// A single accepted utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    /// Trimmed and truncated text
    pub text: String,
}

impl Message {
    /// Apply trimming, noise filtering, and truncation to a raw text unit.
    ///
    /// Returns `None` if the unit should not be emitted.
    pub fn accept(role: Role, raw: &str) -> Option<Self> {
        let text = raw.trim();

        if text.chars().count() <= MIN_TEXT_CHARS {
            return None;
        }
        if NOISE_PREFIXES.iter().any(|prefix| text.starts_with(prefix)) {
            return None;
        }

        Some(Self {
            role,
            text: truncate_chars(text, role.max_chars()).to_string(),
        })
    }
}

/// Renders as `[USER]: ...` or `[ASSISTANT]: ...`.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {}", self.role.tag(), self.text)
    }
}

/// Collect the text units of a message `content` field.
///
/// A string yields itself. An array yields the `text` of every block whose
/// `type` is a text block type; other blocks are skipped.
pub fn text_units(content: &Value) -> Vec<&str> {
    match content {
        Value::String(text) => vec![text.as_str()],
        Value::Array(blocks) => blocks
            .iter()
            .filter_map(|block| {
                let block = block.as_object()?;
                let kind = block.get("type")?.as_str()?;
                if !TEXT_BLOCK_TYPES.contains(&kind) {
                    return None;
                }
                block.get("text")?.as_str()
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Extract every accepted message from one payload's content.
pub fn extract(role: Role, content: &Value) -> Vec<Message> {
    text_units(content)
        .into_iter()
        .filter_map(|unit| Message::accept(role, unit))
        .collect()
}

/// Truncate to at most `max` characters without splitting a character.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
