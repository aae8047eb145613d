//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default limit on the number of nodes a map may declare
pub const DEFAULT_MAX_NODES: usize = 1_000_000;

/// File name looked up in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "roadpath.toml";

/// Top-level roadpath configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadpathConfig {
    /// Map loading limits
    #[serde(default)]
    pub map: MapConfig,

    /// Search budget overrides
    #[serde(default)]
    pub search: SearchConfig,
}

/// Configuration for loading map files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Refuse maps with more nodes than this
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,
}

/// Overrides for the budgets declared in a map header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_private: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_construction: Option<usize>,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            max_nodes: default_max_nodes(),
        }
    }
}

fn default_max_nodes() -> usize {
    DEFAULT_MAX_NODES
}
