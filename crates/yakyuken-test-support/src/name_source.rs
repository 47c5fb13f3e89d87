//! Test name sources — mock `NameSource` implementations for tests.

use async_trait::async_trait;
use yakyuken_core::error::GameError;
use yakyuken_core::name_source::NameSource;

/// A name source that always returns the configured text verbatim.
#[derive(Debug, Clone)]
pub struct StaticNameSource(pub String);

#[async_trait]
impl NameSource for StaticNameSource {
    async fn load_name(&self) -> Result<String, GameError> {
        Ok(self.0.clone())
    }
}

/// A name source that always fails. Useful for testing the title fallback.
#[derive(Debug)]
pub struct FailingNameSource;

#[async_trait]
impl NameSource for FailingNameSource {
    async fn load_name(&self) -> Result<String, GameError> {
        Err(GameError::Resource("name.txt: not found".into()))
    }
}
