//! Model constants. All durations are in hours unless the name says otherwise.

/// Name of the modeled drug, shown in the half-life label.
pub const DRUG_NAME: &str = "Vortioxetine";

/// Average elimination half-life of vortioxetine, in hours.
///
/// Compiled in on purpose: the half-life is not user-configurable.
///
/// # Examples
///
/// ```
/// use dose_core::constants::HALF_LIFE_HOURS;
/// assert!(HALF_LIFE_HOURS > 0.0);
/// assert_eq!(HALF_LIFE_HOURS, 66.0);
/// ```
pub const HALF_LIFE_HOURS: f64 = 66.0;

/// chrono format string for dose timestamps (`yyyy-MM-dd HH:mm`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Human-readable form of [`TIMESTAMP_FORMAT`], used in messages.
pub const TIMESTAMP_PATTERN: &str = "yyyy-MM-dd HH:mm";

/// Exact character length of a timestamp in the fixed pattern.
pub const TIMESTAMP_LEN: usize = 16;

/// Preference key under which the last entered dose timestamp is persisted.
pub const PREF_LAST_DOSE_KEY: &str = "lastDoseTime";

/// Percentage of the dose present at the moment it is taken.
pub const FULL_PERCENT: f64 = 100.0;

/// Results below this percentage are reported as negligible.
pub const NEGLIGIBLE_PERCENT: f64 = 0.01;

pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Shown under every result; the model is a rough estimate only.
pub const DISCLAIMER: &str = "Disclaimer: This is a simplified estimate and NOT medical advice. \
Consult your doctor for any medical concerns.";
