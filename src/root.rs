//! Browsing root
//!
//! The single absolute directory every relative path is resolved against. Built once
//! before serving requests and never mutated afterwards.

use crate::error::{BrowseError, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming the browsing root.
pub const ROOT_DIR_ENV: &str = "ROOT_DIR";

/// Immutable browsing root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootContext {
    path: PathBuf,
}

impl RootContext {
    /// Create a root from an existing directory. The path is canonicalized.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let canonical = dunce::canonicalize(path).map_err(|e| {
            BrowseError::ConfigError(format!(
                "Failed to canonicalize root {}: {}",
                path.display(),
                e
            ))
        })?;
        if !canonical.is_dir() {
            return Err(BrowseError::ConfigError(format!(
                "Root {} is not a directory",
                canonical.display()
            )));
        }
        Ok(Self { path: canonical })
    }

    /// Pick the root from, in order: the explicit value, `ROOT_DIR`, the working directory.
    pub fn from_env_or_cwd(explicit: Option<&Path>) -> Result<Self> {
        if let Some(p) = explicit {
            if !p.as_os_str().is_empty() {
                return Self::new(p);
            }
        }
        if let Ok(env_root) = std::env::var(ROOT_DIR_ENV) {
            if !env_root.is_empty() {
                return Self::new(env_root);
            }
        }
        let cwd = std::env::current_dir().map_err(|e| {
            BrowseError::ConfigError(format!("Failed to read current directory: {}", e))
        })?;
        Self::new(cwd)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
