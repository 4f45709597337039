//! Key/value persistence for user data.
//!
//! Stores are handed a [`KvStorage`] implementation instead of touching the
//! filesystem directly, so tests can swap in [`MemoryStorage`]. The file
//! backend keeps one JSON document per key under the data directory.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use jstricks_core::error::{Error, Result};

/// Storage key holding the serialized favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// Storage key holding the dark-mode flag.
pub const DARK_MODE_KEY: &str = "dark_mode";

/// String key/value store with explicit failure reporting.
///
/// Callers treat their in-memory copy as authoritative and degrade
/// gracefully when a storage call fails.
pub trait KvStorage {
    /// Read the value for `key`. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Filesystem-backed store: each key maps to `<dir>/<key>.json`.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            Error::storage(format!("cannot create {}: {}", dir.display(), e))
        })?;
        Ok(Self { dir })
    }

    /// Default data directory: `~/.local/share/jstricks` (platform equivalent).
    pub fn default_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|d| d.join("jstricks"))
            .ok_or_else(|| Error::StorageDirUnavailable {
                path: PathBuf::from("<data_local_dir>"),
            })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::storage(format!("cannot read key {key}: {e}"))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        write_atomic(&path, value)
            .map_err(|e| Error::storage(format!("cannot write key {key}: {e}")))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::storage(format!("cannot remove key {key}: {e}"))),
        }
    }
}

/// Write via a temp file and rename so readers never observe a partial file.
fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

/// In-memory store for tests. `fail_writes` simulates a full or read-only
/// backend: reads keep working while every mutation returns an error.
#[derive(Default)]
pub struct MemoryStorage {
    map: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an initial value, bypassing the failure switch.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.map.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl KvStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::storage(format!("write to {key} refused")));
        }
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::storage(format!("remove of {key} refused")));
        }
        self.map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_storage_get_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();
        assert_eq!(storage.get("absent").unwrap(), None);
    }

    #[test]
    fn file_storage_set_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();
        storage.set(FAVORITES_KEY, "[1,2,3]").unwrap();
        assert_eq!(
            storage.get(FAVORITES_KEY).unwrap().as_deref(),
            Some("[1,2,3]")
        );
    }

    #[test]
    fn file_storage_set_overwrites() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();
        storage.set(DARK_MODE_KEY, "true").unwrap();
        storage.set(DARK_MODE_KEY, "false").unwrap();
        assert_eq!(
            storage.get(DARK_MODE_KEY).unwrap().as_deref(),
            Some("false")
        );
    }

    #[test]
    fn file_storage_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();
        storage.set("k", "v").unwrap();
        storage.remove("k").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn file_storage_writes_one_file_per_key() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path()).unwrap();
        storage.set(FAVORITES_KEY, "[]").unwrap();
        storage.set(DARK_MODE_KEY, "true").unwrap();
        assert!(dir.path().join("favorites.json").is_file());
        assert!(dir.path().join("dark_mode.json").is_file());
    }

    #[test]
    fn file_storage_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        {
            let mut storage = FileStorage::new(dir.path()).unwrap();
            storage.set("k", "persisted").unwrap();
        }
        let storage = FileStorage::new(dir.path()).unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn memory_storage_fail_writes_keeps_reads_working() {
        let mut storage = MemoryStorage::new().with_value("k", "v");
        storage.set_fail_writes(true);
        assert!(storage.set("k", "other").is_err());
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }
}
