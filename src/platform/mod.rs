//! Platform abstraction layer
//!
//! The simulation never reads the wall clock directly. Drivers hand it a
//! [`Clock`]: [`SystemClock`] for real-time play, [`ManualClock`] for
//! headless runs and tests where time advances in fixed steps.

use std::time::Instant;

/// Monotonic time source in seconds
pub trait Clock {
    fn now_secs(&self) -> f64;
}

/// Real elapsed time since construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new(now: f64) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, secs: f64) {
        self.now += secs;
    }

    pub fn set(&mut self, now: f64) {
        self.now = now;
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> f64 {
        self.now
    }
}
