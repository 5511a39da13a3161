//! Path normalization for comparing session working directories.
//!
//! Recorded `cwd` values and the `--workspace` argument come from different
//! places (shell input, the agent's own bookkeeping), so both are brought into
//! the same absolute, symlink-resolved form before they are compared.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
///
/// Only the bare `~` and `~/...` forms are expanded. If the home directory
/// cannot be determined the input is returned unchanged.
pub fn expand_tilde(input: &str) -> PathBuf {
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(stripped) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(input)
}

/// Normalize a path to an absolute, symlink-resolved form.
///
/// Resolution is non-strict: every existing prefix is canonicalized, and
/// once a component does not exist the remainder is appended lexically
/// (`.` dropped, `..` pops). Trailing separators do not affect the result.
///
/// # Errors
///
/// Returns any filesystem error other than "not found" encountered while
/// resolving, or a failure to read the current directory for relative input.
pub fn normalize(input: &str) -> io::Result<PathBuf> {
    let expanded = expand_tilde(input);
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()?.join(expanded)
    };
    resolve(&absolute)
}

fn resolve(path: &Path) -> io::Result<PathBuf> {
    let mut resolved = PathBuf::new();
    let mut missing = false;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                if missing {
                    continue;
                }
                match fs::canonicalize(&resolved) {
                    Ok(real) => resolved = real,
                    Err(e) if e.kind() == io::ErrorKind::NotFound => missing = true,
                    Err(e) => return Err(e),
                }
            }
        }
    }

    Ok(resolved)
}
