//! Half-life engine implementing the [`DecayCalculator`] trait.
//!
//! Computes `100 * 0.5^(elapsed / half_life)` in `f64`. The engine is a
//! plain value; construct one per shell or share it freely.

use dose_core::constants::{FULL_PERCENT, HALF_LIFE_HOURS};
use dose_core::error::DecayError;
use dose_core::traits::DecayCalculator;
use tracing::trace;

/// The production decay calculator.
///
/// Holds a half-life that is always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfLifeEngine {
    half_life_hours: f64,
}

impl Default for HalfLifeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HalfLifeEngine {
    /// Engine using the compiled-in [`HALF_LIFE_HOURS`].
    pub fn new() -> Self {
        Self {
            half_life_hours: HALF_LIFE_HOURS,
        }
    }

    /// Engine with a custom half-life.
    ///
    /// # Examples
    ///
    /// ```
    /// use dose_decay::HalfLifeEngine;
    /// assert!(HalfLifeEngine::with_half_life(12.0).is_ok());
    /// assert!(HalfLifeEngine::with_half_life(0.0).is_err());
    /// ```
    pub fn with_half_life(hours: f64) -> Result<Self, DecayError> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(DecayError::InvalidHalfLife(hours));
        }
        Ok(Self {
            half_life_hours: hours,
        })
    }
}

impl DecayCalculator for HalfLifeEngine {
    fn half_life_hours(&self) -> f64 {
        self.half_life_hours
    }

    fn percentage_after(&self, elapsed_hours: f64) -> Result<f64, DecayError> {
        if !elapsed_hours.is_finite() || elapsed_hours < 0.0 {
            return Err(DecayError::InvalidElapsed(elapsed_hours));
        }

        // N(t) = N0 * (1/2)^(t/T), with N0 = 100%
        let percent = FULL_PERCENT * 0.5_f64.powf(elapsed_hours / self.half_life_hours);

        trace!(
            elapsed_hours,
            half_life_hours = self.half_life_hours,
            percent,
            "decay computed"
        );
        Ok(percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use dose_core::types::{DoseTime, Remaining};
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn now() -> DoseTime {
        DoseTime(
            NaiveDate::from_ymd_opt(2024, 5, 10)
                .unwrap()
                .and_hms_opt(9, 15, 0)
                .unwrap(),
        )
    }

    fn hours_before(t: DoseTime, hours: i64) -> DoseTime {
        DoseTime(t.0 - Duration::hours(hours))
    }

    #[test]
    fn default_uses_compiled_half_life() {
        assert_eq!(HalfLifeEngine::default().half_life_hours(), HALF_LIFE_HOURS);
    }

    #[test]
    fn rejects_bad_half_life() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                HalfLifeEngine::with_half_life(bad).is_err(),
                "accepted half-life {bad}"
            );
        }
    }

    #[test]
    fn zero_elapsed_is_exactly_full() {
        let engine = HalfLifeEngine::new();
        assert_eq!(engine.percentage_after(0.0).unwrap(), 100.0);
        assert_eq!(
            engine.percentage_remaining(Some(now()), Some(now())).unwrap(),
            Remaining::Percentage(100.0)
        );
    }

    #[test]
    fn one_half_life_is_fifty() {
        let engine = HalfLifeEngine::new();
        let p = engine
            .percentage_remaining(Some(hours_before(now(), 66)), Some(now()))
            .unwrap()
            .percentage()
            .unwrap();
        assert!((p - 50.0).abs() < EPS, "got {p}");
    }

    #[test]
    fn two_half_lives_is_twenty_five() {
        let engine = HalfLifeEngine::new();
        let p = engine
            .percentage_remaining(Some(hours_before(now(), 132)), Some(now()))
            .unwrap()
            .percentage()
            .unwrap();
        assert!((p - 25.0).abs() < EPS, "got {p}");
    }

    #[test]
    fn future_dose_is_distinct() {
        let engine = HalfLifeEngine::new();
        let later = DoseTime(now().0 + Duration::hours(1));
        assert_eq!(
            engine.percentage_remaining(Some(later), Some(now())).unwrap(),
            Remaining::FutureDose
        );
    }

    #[test]
    fn one_minute_in_future_is_future() {
        let engine = HalfLifeEngine::new();
        let later = DoseTime(now().0 + Duration::minutes(1));
        assert_eq!(
            engine.percentage_remaining(Some(later), Some(now())).unwrap(),
            Remaining::FutureDose
        );
    }

    #[test]
    fn missing_arguments() {
        let engine = HalfLifeEngine::new();
        assert_eq!(
            engine.percentage_remaining(None, Some(now())),
            Err(DecayError::MissingTimestamp { field: "last_dose" })
        );
        assert_eq!(
            engine.percentage_remaining(Some(now()), None),
            Err(DecayError::MissingTimestamp { field: "now" })
        );
    }

    #[test]
    fn rejects_bad_elapsed() {
        let engine = HalfLifeEngine::new();
        assert!(engine.percentage_after(-0.5).is_err());
        assert!(engine.percentage_after(f64::NAN).is_err());
        assert!(engine.percentage_after(f64::INFINITY).is_err());
    }

    #[test]
    fn very_long_elapsed_approaches_zero() {
        let engine = HalfLifeEngine::new();
        let p = engine.percentage_after(1.0e6).unwrap();
        assert!(p >= 0.0);
        assert!(p < 1e-12);
    }

    #[test]
    fn custom_half_life() {
        let engine = HalfLifeEngine::with_half_life(10.0).unwrap();
        let p = engine.percentage_after(30.0).unwrap();
        assert!((p - 12.5).abs() < EPS);
    }

    #[test]
    fn sub_minute_precision_counts() {
        let engine = HalfLifeEngine::new();
        let dose = now();
        let later = DoseTime(dose.0 + Duration::seconds(30));
        let p = engine
            .percentage_remaining(Some(dose), Some(later))
            .unwrap()
            .percentage()
            .unwrap();
        assert!(p < 100.0);
        assert!(p > 99.99);
    }

    // --- proptest ---

    proptest! {
        #[test]
        fn percentage_in_bounds(elapsed in 0.0f64..1.0e7) {
            let p = HalfLifeEngine::new().percentage_after(elapsed).unwrap();
            prop_assert!((0.0..=100.0).contains(&p));
        }

        #[test]
        fn strictly_decreasing(a in 0u32..600_000, b in 0u32..600_000) {
            prop_assume!(a != b);
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            let engine = HalfLifeEngine::new();
            // Minutes, to stay well inside f64 resolution.
            let p_lo = engine.percentage_after(lo as f64 / 60.0).unwrap();
            let p_hi = engine.percentage_after(hi as f64 / 60.0).unwrap();
            prop_assert!(p_lo > p_hi, "f({}) = {} <= f({}) = {}", lo, p_lo, hi, p_hi);
        }

        #[test]
        fn each_half_life_halves(half_life in 0.5f64..500.0, elapsed in 0.0f64..1000.0) {
            let engine = HalfLifeEngine::with_half_life(half_life).unwrap();
            let p0 = engine.percentage_after(elapsed).unwrap();
            let p1 = engine.percentage_after(elapsed + half_life).unwrap();
            prop_assert!((p1 - p0 / 2.0).abs() <= 1e-9 * p0.max(1e-300));
        }

        #[test]
        fn future_never_positive(minutes_ahead in 1i64..1_000_000) {
            let engine = HalfLifeEngine::new();
            let dose = DoseTime(now().0 + Duration::minutes(minutes_ahead));
            let r = engine.percentage_remaining(Some(dose), Some(now())).unwrap();
            prop_assert_eq!(r, Remaining::FutureDose);
        }
    }
}
