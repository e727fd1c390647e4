//! MergeService: orchestrates sources and deserializes to BrowseConfig.

use crate::config::sources::file;
use crate::config::BrowseConfig;
use config::{Config, ConfigError, Environment};
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> config file -> environment (highest).
    ///
    /// Environment keys use the `ROOTBROWSE__` prefix with `__` between levels:
    /// `ROOTBROWSE__ROOT=/srv` sets `root`, `ROOTBROWSE__LOGGING__LEVEL=debug` sets
    /// `logging.level`.
    pub fn load(config_file: Option<&Path>) -> Result<BrowseConfig, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = config_file {
            builder = file::add_to_builder(builder, path)?;
        }
        let builder = builder.add_source(
            Environment::with_prefix("ROOTBROWSE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
