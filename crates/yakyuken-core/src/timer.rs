//! Timer abstraction for the fixed display and hold durations.

use std::time::Duration;

use async_trait::async_trait;

/// Suspends the current sequence for a fixed duration.
///
/// Every wait in a game sequence goes through this trait so tests can
/// observe the requested durations without actually sleeping.
#[async_trait]
pub trait Timer: Send + Sync {
    /// Resolves once `duration` has elapsed.
    async fn sleep(&self, duration: Duration);
}

/// Production timer backed by the tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[async_trait]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
