//! Service configuration
//!
//! Resolution order: built-in defaults, then an optional TOML file, then
//! command-line flags (applied by the binary).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::DEFAULT_ADDR;
use crate::types::{ConfigError, Platform, Queue, Region};

/// Values used when a request leaves a parameter out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDefaults {
    pub region: Region,
    pub platform: Platform,
    pub queue: Queue,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            region: Region::Eu,
            platform: Platform::Pc,
            queue: Queue::Competitive,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Bind address for the API server
    pub addr: String,
    /// Fixture file backing the record source
    pub fixtures: Option<PathBuf>,
    pub defaults: QueryDefaults,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            fixtures: None,
            defaults: QueryDefaults::default(),
        }
    }
}

impl ServiceConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
