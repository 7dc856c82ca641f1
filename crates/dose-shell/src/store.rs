//! Preference stores.
//!
//! [`FilePreferenceStore`] keeps all preferences in one JSON file:
//!
//! ```text
//! { "version": 1, "entries": { "lastDoseTime": "2024-05-10 09:15" } }
//! ```
//!
//! Every `set` rewrites the whole file. [`MemoryPreferenceStore`] keeps
//! entries in memory only and counts writes, for tests.

use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use dose_core::error::StoreError;
use dose_core::traits::PreferenceStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Current preference file format version.
pub const PREFS_VERSION: u32 = 1;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PrefsFile {
    version: u32,
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// JSON-file-backed preference store.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. An unreadable or malformed file is
    /// an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match std::fs::read(&path) {
            Ok(bytes) => {
                let file: PrefsFile = serde_json::from_slice(&bytes)
                    .map_err(|e| StoreError::Corrupted(format!("{}: {e}", path.display())))?;
                if file.version != PREFS_VERSION {
                    return Err(StoreError::Corrupted(format!(
                        "unsupported version: {}",
                        file.version
                    )));
                }
                file.entries
            }
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StoreError::Io(format!("{}: {e}", path.display()))),
        };

        debug!(path = %path.display(), entries = entries.len(), "preferences loaded");
        Ok(Self { path, entries })
    }

    /// Open the store, falling back to an empty one if the file cannot be
    /// read. The next `set` overwrites the bad file.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                warn!(path = %path.display(), "ignoring preferences: {e}");
                Self {
                    path,
                    entries: BTreeMap::new(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StoreError::Io(format!("{}: {e}", parent.display())))?;
            }
        }

        let file = PrefsFile {
            version: PREFS_VERSION,
            entries: self.entries.clone(),
        };
        let json = serde_json::to_vec_pretty(&file)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, json)
            .map_err(|e| StoreError::Io(format!("{}: {e}", self.path.display())))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()?;
        debug!(key, path = %self.path.display(), "preference written");
        Ok(())
    }
}

/// In-memory preference store. Counts writes so callers can assert on them.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry. The seed does not count as a write.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Number of successful `set` calls.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
