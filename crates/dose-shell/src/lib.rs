//! # dose-shell
//! Interactive shell for dose tracking: the text field, the result line,
//! the persisted last input and the tracker configuration.

pub mod clock;
pub mod command;
pub mod config;
pub mod readout;
pub mod session;
pub mod shell;
pub mod store;

pub use clock::{FixedClock, SystemClock};
pub use command::{parse_line, LineCommand};
pub use config::TrackerConfig;
pub use readout::{Readout, Tone};
pub use session::{run_session, write_banner, write_readout};
pub use shell::{Calculation, Shell, ShellEvent};
pub use store::{FilePreferenceStore, MemoryPreferenceStore};

use dose_decay::HalfLifeEngine;
use tracing::info;

/// The shell as the tracker binary runs it.
pub type TrackerShell = Shell<HalfLifeEngine, FilePreferenceStore, SystemClock>;

/// Build the production shell for `config`.
///
/// Never fails: an unreadable preference file is logged and replaced.
pub fn open_tracker(config: &TrackerConfig) -> TrackerShell {
    let prefs_path = config.prefs_path();
    info!(path = %prefs_path.display(), "opening preferences");
    let store = FilePreferenceStore::open_or_empty(prefs_path);
    Shell::new(HalfLifeEngine::new(), store, SystemClock)
}
