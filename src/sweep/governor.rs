//! Pause and save cadence for the sweep loop

use std::time::Duration;

use crate::error::{Result, SweepError};

/// Fires at every nonzero multiple of `every`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    every: u64,
}

impl Cadence {
    pub fn new(every: u64) -> Result<Self> {
        if every == 0 {
            return Err(SweepError::config("frequency must be at least 1"));
        }
        Ok(Self { every })
    }

    /// Index 0 never fires
    pub fn fires_at(&self, index: u64) -> bool {
        index != 0 && index % self.every == 0
    }
}

/// Sleeps for a fixed duration whenever its cadence fires
#[derive(Debug, Clone)]
pub struct RateGovernor {
    cadence: Cadence,
    pause: Duration,
}

impl RateGovernor {
    pub fn new(cadence: Cadence, pause: Duration) -> Self {
        Self { cadence, pause }
    }

    /// Pause before processing `index` if the cadence fires; returns whether it did
    pub async fn throttle(&self, index: u64) -> bool {
        if !self.cadence.fires_at(index) {
            return false;
        }

        tracing::warn!(index, "Sleeping for {} seconds...", self.pause.as_secs_f64());
        tokio::time::sleep(self.pause).await;
        true
    }
}
