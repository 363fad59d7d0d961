//! # Configuration
//!
//! Resolution order, highest first:
//!
//! 1. `--mapping` on the command line
//! 2. `SEASON_MAPPING` in the environment
//! 3. The TOML file passed with `--config`
//! 4. Built-in defaults (full mapping, Spring)
//!
//! ```toml
//! mapping = "partial"
//! value = 3
//! ```

use serde::{Deserialize, Serialize};
use season_core::{DEFAULT_SEASON, Mapping, SeasonError, SeasonValue};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the configured mapping.
pub const MAPPING_ENV: &str = "SEASON_MAPPING";

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value in {var}: {source}")]
    Env {
        var: &'static str,
        source: SeasonError,
    },
}

// =============================================================================
// CONFIG
// =============================================================================

/// Resolved settings for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeasonConfig {
    /// Mapping used to convert values to names.
    pub mapping: Mapping,
    /// Value converted when no subcommand is given.
    pub value: SeasonValue,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            mapping: Mapping::default(),
            value: DEFAULT_SEASON.value(),
        }
    }
}

impl SeasonConfig {
    /// Load the file (if any), then apply the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env(std::env::var(MAPPING_ENV).ok().as_deref())
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Parse TOML text. `origin` is only used in error messages.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Apply the value of `SEASON_MAPPING`, if set.
    pub fn with_env(mut self, mapping: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(raw) = mapping {
            self.mapping = raw.parse().map_err(|source| ConfigError::Env {
                var: MAPPING_ENV,
                source,
            })?;
        }
        Ok(self)
    }

    /// Apply the command-line mapping, if given.
    #[must_use]
    pub fn with_mapping(mut self, mapping: Option<Mapping>) -> Self {
        if let Some(mapping) = mapping {
            self.mapping = mapping;
        }
        self
    }
}
