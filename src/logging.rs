//! Diagnostic logging setup.
//!
//! Logs go to stderr through `tracing-subscriber`. The filter comes from
//! `RUST_LOG` when set, otherwise from the `-v`/`-q` flags, otherwise from
//! the configured default level.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration built from CLI flags and the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Number of `-v` flags
    pub verbose: u8,
    /// `-q` given; wins over `-v`
    pub quiet: bool,
    /// Level from the config file, used when no flag is given
    pub default_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            quiet: false,
            default_level: "warn".to_string(),
        }
    }
}

impl LogConfig {
    /// Resolve the effective level from flags and the configured default.
    pub fn level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => parse_level(&self.default_level).unwrap_or(Level::WARN),
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Build an EnvFilter, preferring RUST_LOG when it is set and valid.
    pub fn build_filter(&self) -> EnvFilter {
        if let Ok(env_filter) = EnvFilter::try_from_default_env() {
            return env_filter;
        }
        EnvFilter::new(format!("cxr={}", self.level().as_str().to_ascii_lowercase()))
    }
}

/// Parse a level string (case-insensitive).
fn parse_level(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(config: &LogConfig) {
    let _ = tracing_subscriber::registry()
        .with(config.build_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .try_init();
}
