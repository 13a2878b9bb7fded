//! Time source used for gravity.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic "now" reader
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to (tests, replays).
///
/// With a non-zero step it also advances by that step after every read, which
/// lets a driven loop see time pass without sleeping.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<Instant>,
    step: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::with_step(Duration::ZERO)
    }

    pub fn with_step(step: Duration) -> Self {
        Self {
            now: Cell::new(Instant::now()),
            step,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}
