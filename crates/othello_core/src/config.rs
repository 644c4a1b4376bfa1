//! TOML configuration shared by the binaries.
//!
//! ```toml
//! [search]
//! max_depth = 7
//! root_depth = 0
//! pruning = true
//!
//! [logging]
//! filter = "info"
//! ```
//!
//! Every field is optional.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::limits::SearchLimits;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub search: SearchLimits,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Rejects limits under which the root itself would be past the horizon.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.beyond_horizon(self.search.root_depth) {
            return Err(ConfigError::Invalid {
                message: format!(
                    "root_depth {} exceeds max_depth {}",
                    self.search.root_depth, self.search.max_depth
                ),
            });
        }
        Ok(())
    }
}
