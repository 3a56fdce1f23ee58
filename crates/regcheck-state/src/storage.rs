//! # Storage Backends
//!
//! Opaque key → blob persistence. Stores hand over fully encoded JSON
//! blobs and never see how or where they are kept.
//!
//! - [`MemoryStorage`]: a map behind a lock, for tests and ephemeral runs.
//! - [`DirectoryStorage`]: one `<key>.json` file per key. Writes go to a
//!   temporary sibling first and are renamed into place, so a reader never
//!   observes a half-written blob.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::error::StateError;

/// Key → blob persistence backend.
pub trait StateStorage: Send + Sync {
    /// Read a blob. `Ok(None)` if nothing is stored under `key`.
    fn load(&self, key: &str) -> Result<Option<String>, StateError>;

    /// Write a blob, replacing any previous one.
    fn save(&self, key: &str, blob: &str) -> Result<(), StateError>;

    /// Delete a blob. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StateError>;

    /// All stored keys, sorted.
    fn keys(&self) -> Result<Vec<String>, StateError>;
}

fn check_key(key: &str) -> Result<(), StateError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && !key.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(StateError::InvalidKey(key.to_string()))
    }
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// In-memory storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StateError> {
        check_key(key)?;
        Ok(self.blobs.read().get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StateError> {
        check_key(key)?;
        self.blobs.write().insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StateError> {
        check_key(key)?;
        self.blobs.write().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StateError> {
        let mut keys: Vec<String> = self.blobs.read().keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

// ---------------------------------------------------------------------------
// DirectoryStorage
// ---------------------------------------------------------------------------

/// One JSON file per key inside a directory.
///
/// The directory is created on the first write.
#[derive(Debug, Clone)]
pub struct DirectoryStorage {
    dir: PathBuf,
}

impl DirectoryStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StateError> {
        check_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl StateStorage for DirectoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StateError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(blob) => {
                tracing::debug!(key, path = %path.display(), "loaded state blob");
                Ok(Some(blob))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StateError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StateError> {
        let path = self.path_for(key)?;
        let io_err = |source| StateError::Io {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, blob).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)?;
        tracing::debug!(key, path = %path.display(), bytes = blob.len(), "saved state blob");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StateError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StateError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn keys(&self) -> Result<Vec<String>, StateError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StateError::Io {
                    key: self.dir.display().to_string(),
                    source,
                })
            }
        };
        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StateError::Io {
                key: self.dir.display().to_string(),
                source,
            })?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if name.starts_with('.') {
                continue;
            }
            if let Some(key) = name.strip_suffix(".json") {
                keys.push(key.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}
