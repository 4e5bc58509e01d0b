//! Configuration for the terminal front-end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tris_core::{DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerRegistry};
use tracing::{debug, info, instrument};

/// Settings loaded from an optional TOML file.
///
/// ```toml
/// log_filter = "strictly_tris=debug"
///
/// [players]
/// x = "Alice"
/// o = "Bob"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TrisConfig {
    /// Starting display names.
    #[serde(default)]
    players: PlayerNames,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

/// Display names assigned before the first game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerNames {
    /// Name for X.
    #[serde(default = "default_x_name")]
    x: String,

    /// Name for O.
    #[serde(default = "default_o_name")]
    o: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_x_name() -> String {
    DEFAULT_X_NAME.to_string()
}

fn default_o_name() -> String {
    DEFAULT_O_NAME.to_string()
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            x: default_x_name(),
            o: default_o_name(),
        }
    }
}

impl Default for TrisConfig {
    fn default() -> Self {
        Self {
            players: PlayerNames::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl TrisConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(x = %config.players.x, o = %config.players.o, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), |p| Self::from_file(p))
    }

    /// Replaces player names with any that were given on the command line.
    pub fn with_overrides(mut self, x: Option<String>, o: Option<String>) -> Self {
        if let Some(x) = x {
            self.players.x = x;
        }
        if let Some(o) = o {
            self.players.o = o;
        }
        self
    }

    /// Builds the starting player registry.
    pub fn registry(&self) -> PlayerRegistry {
        PlayerRegistry::with_names(self.players.x.clone(), self.players.o.clone())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
