//! Key-value blob stores
//!
//! The tracker persists exactly two opaque blobs, each read in full at
//! startup and overwritten in full after every mutation. A `BlobStore` only
//! has to get and put whole strings by key.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{TrackerError, TrackerResult};

use super::file_io::{read_to_string_opt, write_atomic};

/// Whole-value string storage addressed by key
pub trait BlobStore {
    /// Read the blob stored under `key`, or `None` if nothing was ever written
    fn read(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Replace the blob stored under `key`
    ///
    /// Implementations must not leave a partially written value behind.
    fn write(&mut self, key: &str, contents: &str) -> TrackerResult<()>;
}

/// Stores each blob as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> TrackerResult<Option<String>> {
        read_to_string_opt(self.path_for(key))
    }

    fn write(&mut self, key: &str, contents: &str) -> TrackerResult<()> {
        write_atomic(self.path_for(key), contents)
    }
}

/// In-memory blob store with an optional total size quota
///
/// A write that would push the stored bytes past the quota fails and leaves
/// the previous value in place, the way a browser's local storage rejects an
/// oversized item.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            blobs: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Seed a blob without going through the quota check
    pub fn insert(&mut self, key: impl Into<String>, contents: impl Into<String>) {
        self.blobs.insert(key.into(), contents.into());
    }

    /// Bytes currently stored across all keys
    pub fn used_bytes(&self) -> usize {
        self.blobs.values().map(String::len).sum()
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> TrackerResult<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, contents: &str) -> TrackerResult<()> {
        if let Some(quota) = self.quota_bytes {
            let existing = self.blobs.get(key).map_or(0, String::len);
            let projected = self.used_bytes() - existing + contents.len();
            if projected > quota {
                return Err(TrackerError::Persistence(format!(
                    "Storage quota exceeded writing '{}': {} bytes needed, {} allowed",
                    key, projected, quota
                )));
            }
        }

        self.blobs.insert(key.to_string(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileBlobStore::new(temp_dir.path().to_path_buf());

        assert_eq!(store.read("transactions").unwrap(), None);

        store.write("transactions", "[1,2,3]").unwrap();
        assert_eq!(store.read("transactions").unwrap().as_deref(), Some("[1,2,3]"));
        assert!(temp_dir.path().join("transactions.json").exists());
    }

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryBlobStore::new();
        store.write("budgets", "{}").unwrap();
        store.write("budgets", r#"{"Food":100}"#).unwrap();

        assert_eq!(store.read("budgets").unwrap().as_deref(), Some(r#"{"Food":100}"#));
        assert_eq!(store.read("missing").unwrap(), None);
    }

    #[test]
    fn test_memory_store_quota() {
        let mut store = MemoryBlobStore::with_quota(10);
        store.write("a", "12345").unwrap();

        // Replacing a key only counts the new size
        store.write("a", "1234567890").unwrap();

        let err = store.write("b", "x").unwrap_err();
        assert!(err.is_persistence());
        assert_eq!(store.read("b").unwrap(), None);
        assert_eq!(store.used_bytes(), 10);
    }
}
