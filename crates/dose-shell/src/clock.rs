//! [`Clock`] implementations.

use chrono::Local;
use dose_core::traits::Clock;
use dose_core::types::DoseTime;

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DoseTime {
        DoseTime(Local::now().naive_local())
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DoseTime);

impl Clock for FixedClock {
    fn now(&self) -> DoseTime {
        self.0
    }
}
