//! Sources of the current time.
//!
//! Functions that depend on "now" take either an explicit reference instant
//! or a [`Clock`], so callers and tests can pin the reference.

use crate::Instant;
use chrono::Local;

/// Port for getting the current local time.
pub trait Clock: Send + Sync {
    /// Current local wall-clock time according to this clock
    fn now(&self) -> Instant;
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Local::now().naive_local()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    at: Instant,
}

impl FixedClock {
    pub fn new(at: Instant) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.at
    }
}
