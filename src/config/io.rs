//! Configuration I/O operations

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Config file path under `home` (`<home>/.config/cxr/config.toml`)
pub fn config_path_in(home: &Path) -> PathBuf {
    home.join(".config").join("cxr").join("config.toml")
}

/// Load configuration from file, or return defaults if not found
pub fn load() -> Result<Config> {
    load_for_home(dirs::home_dir().as_deref())
}

/// Load configuration for a home directory; no home means defaults
pub fn load_for_home(home: Option<&Path>) -> Result<Config> {
    match home {
        Some(home) => load_from(&config_path_in(home)),
        None => {
            tracing::debug!("no home directory; using default config");
            Ok(Config::default())
        }
    }
}

/// Load configuration from a specific file, or return defaults if it does not exist
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    Ok(config)
}
