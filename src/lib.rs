//! cxr - Codex conversation extractor
//!
//! Turns a tree of Codex session logs into per-session transcripts and
//! batch manifests. The pipeline is [`selector`] -> [`export`] -> [`batch`],
//! driven end to end by [`pipeline::run`].

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod paths;
pub mod pipeline;
pub mod progress;
pub mod selector;
pub mod session;
pub mod workspace;

pub use batch::BatchManifest;
pub use config::Config;
pub use error::ExtractError;
pub use pipeline::{ExtractOptions, ExtractSummary};
pub use selector::SelectionFilter;
pub use session::{Message, Role, SessionRecord};
