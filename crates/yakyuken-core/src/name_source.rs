//! Display-name resource abstraction.

use async_trait::async_trait;

use crate::error::GameError;

/// Source of the character's display name, read once per session.
#[async_trait]
pub trait NameSource: Send + Sync {
    /// Loads the raw display name.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Resource` if the name cannot be read.
    async fn load_name(&self) -> Result<String, GameError>;
}
