//! Engine configuration.

use crate::error::ConfigError;
use crate::types::Mark;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a [`GameEngine`](crate::GameEngine).
///
/// ```toml
/// starting_mark = "O"
/// history_review = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct EngineConfig {
    /// Mark that moves first when a game is started from this config.
    #[serde(default = "default_starting_mark")]
    starting_mark: Mark,

    /// Whether past snapshots can be reviewed.
    #[serde(default = "default_history_review")]
    history_review: bool,
}

fn default_starting_mark() -> Mark {
    Mark::X
}

fn default_history_review() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_mark: default_starting_mark(),
            history_review: default_history_review(),
        }
    }
}

impl EngineConfig {
    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            starting_mark = %config.starting_mark,
            history_review = config.history_review,
            "Config loaded successfully"
        );
        Ok(config)
    }
}
