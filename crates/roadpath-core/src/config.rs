//! Configuration for roadpath
//!
//! Read from `roadpath.toml`: either the file passed with `--config` or the
//! one in the working directory. Every field is optional.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, RoadpathError};
use crate::graph::SearchBudget;

pub use types::{MapConfig, RoadpathConfig, SearchConfig, CONFIG_FILE_NAME, DEFAULT_MAX_NODES};

impl RoadpathConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RoadpathConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "config_loaded");
        Ok(config)
    }

    /// Load `roadpath.toml` from `dir`, or defaults if there is none
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RoadpathError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply the `[search]` overrides on top of a map's own budget
    pub fn budget_over(&self, base: SearchBudget) -> SearchBudget {
        SearchBudget {
            max_private: self.search.max_private.unwrap_or(base.max_private),
            max_construction: self.search.max_construction.unwrap_or(base.max_construction),
        }
    }
}
