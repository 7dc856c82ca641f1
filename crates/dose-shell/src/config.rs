//! Tracker configuration.
//!
//! Provides [`TrackerConfig`] with defaults for the data directory and log
//! level. The half-life is intentionally absent: it is compiled in.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable overriding the default data directory.
pub const DATA_DIR_ENV: &str = "DOSE_TRACKER_DATA_DIR";

/// File name of the preference store inside the data directory.
pub const PREFS_FILE_NAME: &str = "prefs.json";

/// Configuration for a tracker instance.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Directory holding the preference file.
    pub data_dir: PathBuf,
    /// Log level filter string (e.g. "warn", "debug", "dose_shell=trace").
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: data_dir_from(std::env::var_os(DATA_DIR_ENV)),
            log_level: "warn".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Path to the JSON preference store.
    pub fn prefs_path(&self) -> PathBuf {
        self.data_dir.join(PREFS_FILE_NAME)
    }
}

/// Resolve the data directory from an optional override, falling back to the
/// per-user data directory.
pub fn data_dir_from(override_dir: Option<OsString>) -> PathBuf {
    match override_dir {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dose-tracker"),
    }
}
