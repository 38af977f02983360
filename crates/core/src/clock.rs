//! Monotonic time source for tick comparisons.
//!
//! The game loop never sleeps on a timer; it compares "now" against the time of
//! the last gravity step. Tests skip the clock and pass milliseconds directly.

use std::time::Instant;

pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin; never decreases.
    fn now_millis(&self) -> u64;
}

/// Wall-clock backed by [`Instant`], origin at construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for deterministic runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now: start_ms }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now
    }
}
