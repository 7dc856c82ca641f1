//! Trait interfaces between crates.
//!
//! - [`DecayCalculator`]: decay math (dose-decay implements)
//! - [`PreferenceStore`]: persisted key-value settings (dose-shell implements)
//! - [`Clock`]: source of the current time (dose-shell implements)

use crate::error::{DecayError, StoreError};
use crate::types::{DoseTime, Remaining};

/// First-order decay of a single dose.
pub trait DecayCalculator: Send + Sync {
    /// Half-life used by this calculator, in hours. Always finite and positive.
    fn half_life_hours(&self) -> f64;

    /// Percentage remaining after `elapsed_hours`.
    ///
    /// Rejects negative and non-finite input with [`DecayError::InvalidElapsed`].
    fn percentage_after(&self, elapsed_hours: f64) -> Result<f64, DecayError>;

    /// Percentage of a dose taken at `last_dose` still present at `now`.
    ///
    /// Either argument being `None` is a caller bug and yields
    /// [`DecayError::MissingTimestamp`]. A dose after `now` yields
    /// [`Remaining::FutureDose`].
    ///
    /// Default implementation: millisecond-precision elapsed hours fed to
    /// [`percentage_after`](Self::percentage_after).
    fn percentage_remaining(
        &self,
        last_dose: Option<DoseTime>,
        now: Option<DoseTime>,
    ) -> Result<Remaining, DecayError> {
        let last_dose = last_dose.ok_or(DecayError::MissingTimestamp { field: "last_dose" })?;
        let now = now.ok_or(DecayError::MissingTimestamp { field: "now" })?;

        if last_dose > now {
            return Ok(Remaining::FutureDose);
        }

        let elapsed = now.hours_since(&last_dose);
        self.percentage_after(elapsed).map(Remaining::Percentage)
    }
}

/// A durable string-to-string settings store.
pub trait PreferenceStore {
    /// Look up a value. Returns `None` if the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Set a value, overwriting any previous one, and make it durable.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> DoseTime;
}
