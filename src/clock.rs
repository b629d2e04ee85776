//! Time source abstraction.
//!
//! The report window is derived from a single clock reading, so everything
//! that needs "now" takes a [`Clock`] instead of calling the system time
//! directly. Production uses [`SystemClock`]; tests and reproducible runs
//! pin the instant with [`FixedClock`].

use chrono::{DateTime, FixedOffset, Local};

/// A timezone-aware source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn at(at: DateTime<FixedOffset>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.at
    }
}
