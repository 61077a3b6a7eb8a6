//! Storage buckets for the storefront.
//!
//! Everything persistent lives in one of two storage areas: a durable one
//! that survives restarts and a tab-scoped one that does not. Both are
//! modeled as [`StorageBucket`] implementations, injected as a capability
//! so the auth flow and session store never touch a concrete backend
//! directly (and tests can substitute [`MemoryBucket`]).
//!
//! Writes are atomic at single-key granularity; there is no cross-key
//! transaction and none is needed.

pub mod users;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use thiserror::Error;

/// Errors that can occur during bucket operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A record violates a uniqueness constraint.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A stored value is structurally invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// A bucket lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// A key-value storage bucket.
///
/// The same surface browser storage offers: string keys, string values,
/// single-key atomic writes.
pub trait StorageBucket: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Remove every key in the bucket.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend cannot be written.
    fn clear(&self) -> Result<(), StorageError>;
}

/// An in-memory bucket.
///
/// Serves two roles: the tab-scoped storage area (contents are lost when the
/// process ends) and the storage fake for tests.
#[derive(Debug, Default)]
pub struct MemoryBucket {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBucket {
    /// Create an empty bucket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBucket for MemoryBucket {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.clear();
        Ok(())
    }
}

/// A durable bucket backed by a single JSON file.
///
/// The whole bucket is one JSON object on disk; every mutation rewrites the
/// file. That is plenty for a user list and a session token, and it keeps
/// the on-disk format inspectable.
#[derive(Debug)]
pub struct JsonFileBucket {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl JsonFileBucket {
    /// Open (or create) a bucket at `path`.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the parent directory cannot be created or
    /// an existing file cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl StorageBucket for JsonFileBucket {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        self.persist(&entries)
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.clear();
        self.persist(&entries)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_bucket_roundtrip() {
        let bucket = MemoryBucket::new();
        assert_eq!(bucket.get("userToken").unwrap(), None);

        bucket.set("userToken", "token-1").unwrap();
        assert_eq!(bucket.get("userToken").unwrap().as_deref(), Some("token-1"));

        bucket.set("userToken", "token-2").unwrap();
        assert_eq!(bucket.get("userToken").unwrap().as_deref(), Some("token-2"));

        bucket.remove("userToken").unwrap();
        assert_eq!(bucket.get("userToken").unwrap(), None);
    }

    #[test]
    fn test_memory_bucket_remove_absent_key_succeeds() {
        let bucket = MemoryBucket::new();
        bucket.remove("missing").unwrap();
    }

    #[test]
    fn test_memory_bucket_clear() {
        let bucket = MemoryBucket::new();
        bucket.set("a", "1").unwrap();
        bucket.set("b", "2").unwrap();
        bucket.clear().unwrap();
        assert_eq!(bucket.get("a").unwrap(), None);
        assert_eq!(bucket.get("b").unwrap(), None);
    }

    #[test]
    fn test_json_file_bucket_survives_reopen() {
        let dir = std::env::temp_dir().join(format!(
            "lilies-storage-test-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("storefront.json");

        {
            let bucket = JsonFileBucket::open(&path).unwrap();
            bucket.set("userToken", "token-123").unwrap();
        }

        let bucket = JsonFileBucket::open(&path).unwrap();
        assert_eq!(
            bucket.get("userToken").unwrap().as_deref(),
            Some("token-123")
        );

        let _ = fs::remove_dir_all(&dir);
    }
}
