//! Configuration type definitions and defaults

use serde::Deserialize;

use crate::batch::DEFAULT_BATCHES;
use crate::selector::DEFAULT_MIN_SIZE;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults for extraction runs; CLI flags take precedence
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtractConfig {
    /// Number of batch manifests to write
    #[serde(default = "default_batches")]
    pub batches: usize,
    /// Minimum session file size in bytes
    #[serde(default = "default_min_size")]
    pub min_size: u64,
}

pub fn default_batches() -> usize {
    DEFAULT_BATCHES
}

pub fn default_min_size() -> u64 {
    DEFAULT_MIN_SIZE
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            batches: default_batches(),
            min_size: default_min_size(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when neither RUST_LOG nor -v/-q is given
    #[serde(default = "default_log_level")]
    pub level: String,
}

pub fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
