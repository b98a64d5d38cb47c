//! Monotonic uptime source for the check timer.
//!
//! Wraps `std::time::Instant`; the millisecond count is what
//! [`CheckTimer`](crate::scheduler::CheckTimer) compares against.

use std::time::Instant;

pub struct Uptime {
    start: Instant,
}

impl Default for Uptime {
    fn default() -> Self {
        Self::new()
    }
}

impl Uptime {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds since construction (monotonic).
    pub fn uptime_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
