//! Engine configuration loaded from TOML.
//!
//! Only rule policies that vary between checkers traditions are
//! configurable; chess has none.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or writing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to write the configuration as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Checkers rule policies.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct CheckersConfig {
    /// When the side to move has any capture, only captures are legal.
    /// Defaults to false.
    #[serde(default)]
    pub forced_capture: bool,
    /// A piece that captured and can capture again keeps moving in the same
    /// turn. Defaults to true.
    #[serde(default = "default_chain_captures")]
    pub chain_captures: bool,
}

fn default_chain_captures() -> bool {
    true
}

impl Default for CheckersConfig {
    fn default() -> Self {
        CheckersConfig {
            forced_capture: false,
            chain_captures: default_chain_captures(),
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub checkers: CheckersConfig,
}

impl EngineConfig {
    /// Loads the configuration from a TOML file.
    ///
    /// If the file does not exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// or [`ConfigError::Parse`] if the file contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Writes the configuration as TOML text.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}
