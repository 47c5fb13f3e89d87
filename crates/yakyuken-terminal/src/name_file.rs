//! Display name read from a plain-text file.

use std::path::PathBuf;

use async_trait::async_trait;
use yakyuken_core::error::GameError;
use yakyuken_core::name_source::NameSource;

/// Reads the display name from a file on every load.
#[derive(Debug, Clone)]
pub struct FileNameSource {
    path: PathBuf,
}

impl FileNameSource {
    /// Creates a source reading `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl NameSource for FileNameSource {
    async fn load_name(&self) -> Result<String, GameError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| GameError::Resource(format!("{}: {e}", self.path.display())))
    }
}
