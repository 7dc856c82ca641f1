//! Shared test helpers for scenario tests.

use std::path::Path;

use chrono::Duration;
use dose_core::types::DoseTime;
use dose_decay::HalfLifeEngine;
use dose_shell::{FilePreferenceStore, FixedClock, Shell};

/// Shell wired to a preference file and a frozen clock.
pub type FileShell = Shell<HalfLifeEngine, FilePreferenceStore, FixedClock>;

/// Fixed evaluation instant used by every scenario.
pub fn reference_now() -> DoseTime {
    DoseTime::parse("2024-05-10 09:15").unwrap()
}

/// `hours` before `now`, formatted for typing into the field.
pub fn typed_hours_before(now: DoseTime, hours: i64) -> String {
    DoseTime(now.0 - Duration::hours(hours)).to_string()
}

/// `hours` after `now`, formatted for typing into the field.
pub fn typed_hours_after(now: DoseTime, hours: i64) -> String {
    DoseTime(now.0 + Duration::hours(hours)).to_string()
}

/// Start (or restart) a shell on the preference file at `prefs`.
pub fn start_shell(prefs: &Path, now: DoseTime) -> FileShell {
    let store = FilePreferenceStore::open_or_empty(prefs);
    Shell::new(HalfLifeEngine::new(), store, FixedClock(now))
}
