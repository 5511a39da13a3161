//! Matching sessions against a target workspace.
//!
//! A session belongs to a workspace when its recorded working directory is
//! the workspace itself or lies somewhere beneath it. Both sides are
//! normalized first, and the comparison is by path component, so a sibling
//! sharing a string prefix (`/a/bx` vs `/a/b`) never matches.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::paths;

/// A workspace filter with the target path normalized once up front.
#[derive(Debug, Clone)]
pub enum WorkspaceFilter {
    /// No workspace configured; every session matches.
    Any,
    /// Sessions must live under this normalized root.
    Root(PathBuf),
    /// The workspace could not be resolved; nothing matches.
    Unresolvable,
}

impl WorkspaceFilter {
    /// Build a filter from the optional `--workspace` argument.
    pub fn new(workspace: Option<&str>) -> Self {
        match workspace {
            None => WorkspaceFilter::Any,
            Some(raw) => match paths::normalize(raw) {
                Ok(root) => WorkspaceFilter::Root(root),
                Err(e) => {
                    debug!(workspace = raw, error = %e, "cannot resolve workspace");
                    WorkspaceFilter::Unresolvable
                }
            },
        }
    }

    /// Check a session's recorded working directory against this filter.
    pub fn matches(&self, session_cwd: Option<&str>) -> bool {
        let root = match self {
            WorkspaceFilter::Any => return true,
            WorkspaceFilter::Unresolvable => return false,
            WorkspaceFilter::Root(root) => root,
        };

        let Some(cwd) = session_cwd.filter(|cwd| !cwd.is_empty()) else {
            return false;
        };

        match paths::normalize(cwd) {
            Ok(session) => is_within(&session, root),
            Err(e) => {
                debug!(cwd, error = %e, "cannot resolve session cwd");
                false
            }
        }
    }
}

/// One-shot form of [`WorkspaceFilter::matches`].
pub fn matches(session_cwd: Option<&str>, workspace: Option<&str>) -> bool {
    WorkspaceFilter::new(workspace).matches(session_cwd)
}

/// Equal paths, or `path` is a component-wise descendant of `root`.
fn is_within(path: &Path, root: &Path) -> bool {
    path.starts_with(root)
}
