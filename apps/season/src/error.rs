//! Application error type.

use season_core::SeasonError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the binary. Any of these exits with status 1.
#[derive(Debug, Error)]
pub enum AppError {
    /// A season or mapping could not be parsed.
    #[error(transparent)]
    Season(#[from] SeasonError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Output could not be rendered.
    #[error("Output error: {0}")]
    Output(String),
}
