//! Domain error types.

use std::time::Duration;

use thiserror::Error;

/// Top-level error type shared by the game crates.
#[derive(Debug, Error)]
pub enum GameError {
    /// A named resource (name file, cue, stage image) could not be loaded.
    #[error("resource error: {0}")]
    Resource(String),

    /// The presentation layer failed to carry out an operation.
    #[error("presentation error: {0}")]
    Presentation(String),

    /// An asset did not finish loading within the allowed time.
    #[error("asset load timed out after {}ms", .0.as_millis())]
    AssetTimeout(Duration),

    /// A transition was requested from a phase that does not allow it.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration is missing or inconsistent.
    #[error("configuration error: {0}")]
    Config(String),
}
