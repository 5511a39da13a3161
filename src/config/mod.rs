//! Configuration management for cxr
//!
//! Settings are read from `~/.config/cxr/config.toml`. The file is optional;
//! a missing file means built-in defaults.

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::Path;

impl Config {
    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration for a given home directory; `None` yields defaults
    pub fn load_for_home(home: Option<&Path>) -> Result<Self> {
        io::load_for_home(home)
    }

    /// Load configuration from a specific path, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }
}
