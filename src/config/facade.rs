//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::BrowseConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the optional file, and the environment overlay.
    pub fn load(config_file: Option<&Path>) -> Result<BrowseConfig, ConfigError> {
        MergeService::load(config_file)
    }

    /// Create default configuration.
    pub fn default() -> BrowseConfig {
        BrowseConfig::default()
    }
}
