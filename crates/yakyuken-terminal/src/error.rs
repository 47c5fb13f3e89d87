//! Yakyuken terminal — startup error types.

use thiserror::Error;
use yakyuken_core::error::GameError;

/// Startup errors for the terminal front-end.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A configuration file could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The game configuration is invalid.
    #[error(transparent)]
    Game(#[from] GameError),
}
