//! Storage backend abstraction.
//!
//! Provides a unified get/set/remove interface over the persisted
//! key-value medium, with an on-disk backend for real use and an
//! in-memory one for tests and embedding.

use std::{
    collections::HashMap,
    io::ErrorKind,
    path::PathBuf,
    sync::RwLock,
};

use vk_core::{IntoIoError, IoError};

/// Errors from the raw storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error("storage lock poisoned")]
    Poisoned,
}

/// The persisted key-value medium the account store runs on.
///
/// Values are opaque strings; callers decide the encoding. Implementations
/// must make each `set` atomic per key: a reader sees either the old value
/// or the new one, never a torn write.
pub trait StorageBackend: Send + Sync {
    /// Read the value at `key`. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value at `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value at `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Move a corrupt value out of the way so the next read starts clean.
    fn quarantine(&self, _key: &str) {}
}

/// On-disk backend: each key is stored as `<key>.json` in one directory.
///
/// Writes go through a temporary file renamed into place, so a reader
/// never sees a half-written value.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).path(path).map_err(Into::into),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).path(&self.dir)?;

        let path = self.key_path(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).path(&tmp)?;
        std::fs::rename(&tmp, &path).path(&tmp)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).path(path).map_err(Into::into),
        }
    }

    fn quarantine(&self, key: &str) {
        let path = self.key_path(key);
        let backup = path.with_extension("json.bak");
        // Ignore errors here, the file may be gone already
        _ = std::fs::copy(&path, &backup);
        _ = std::fs::remove_file(&path);
    }
}

/// In-memory backend, for tests and embedding. Nothing touches disk.
#[derive(Default)]
pub struct MemoryBackend {
    map: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self.map.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.map.write().map_err(|_| StoreError::Poisoned)?;
        map.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.map.write().map_err(|_| StoreError::Poisoned)?;
        map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_backend_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(tmp.path());

        assert_eq!(backend.get("users").unwrap(), None);
        backend.set("users", "[1,2,3]").unwrap();
        assert_eq!(backend.get("users").unwrap().as_deref(), Some("[1,2,3]"));

        backend.remove("users").unwrap();
        assert_eq!(backend.get("users").unwrap(), None);
        // Removing again is fine
        backend.remove("users").unwrap();
    }

    #[test]
    fn file_backend_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(tmp.path());

        backend.set("currentUser", "old").unwrap();
        backend.set("currentUser", "new").unwrap();
        assert_eq!(backend.get("currentUser").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn file_backend_creates_directory_on_first_write() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(tmp.path().join("deeper"));

        backend.set("rememberMe", "true").unwrap();
        assert_eq!(backend.get("rememberMe").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn quarantine_moves_value_aside() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(tmp.path());

        backend.set("users", "{corrupt").unwrap();
        backend.quarantine("users");

        assert_eq!(backend.get("users").unwrap(), None);
        let backup = tmp.path().join("users.json.bak");
        assert_eq!(std::fs::read_to_string(backup).unwrap(), "{corrupt");
    }

    #[test]
    fn memory_backend_round_trip() {
        let backend = MemoryBackend::new();

        assert_eq!(backend.get("users").unwrap(), None);
        backend.set("users", "[]").unwrap();
        assert_eq!(backend.get("users").unwrap().as_deref(), Some("[]"));
        backend.remove("users").unwrap();
        assert_eq!(backend.get("users").unwrap(), None);
    }
}
