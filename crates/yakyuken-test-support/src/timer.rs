//! Test timer — returns immediately and remembers what was asked for.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use yakyuken_core::timer::Timer;

/// A timer that never sleeps. Every requested duration is recorded in order.
#[derive(Debug, Default)]
pub struct InstantTimer {
    requested: Mutex<Vec<Duration>>,
}

impl InstantTimer {
    /// Create a timer with an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all requested durations.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().unwrap().clone()
    }

    /// Returns the sum of all requested durations.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn total(&self) -> Duration {
        self.requested.lock().unwrap().iter().sum()
    }
}

#[async_trait]
impl Timer for InstantTimer {
    async fn sleep(&self, duration: Duration) {
        self.requested.lock().unwrap().push(duration);
    }
}
