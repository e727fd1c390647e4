//! Configuration
//!
//! Layered configuration: built-in defaults, then an optional TOML file, then
//! `ROOTBROWSE__*` environment variables.

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Browsing root; falls back to `ROOT_DIR`, then the working directory
    #[serde(default)]
    pub root: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}
