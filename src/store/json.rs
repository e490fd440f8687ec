//! JSON file store implementation.

use super::ProcessedStore;
use crate::error::Result;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::debug;

/// Processed set backed by a JSON array of ids on disk.
///
/// The file is a sorted, pretty-printed array. Every update writes a temporary
/// file next to the target and renames it into place, so a crash never leaves
/// a half-written set behind.
pub struct JsonFileStore {
    path: PathBuf,
    ids: RwLock<BTreeSet<String>>,
}

impl JsonFileStore {
    /// Load the store from `path`. A missing file yields an empty set.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let ids = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let ids: Vec<String> = serde_json::from_str(&content)?;
            ids.into_iter().collect()
        } else {
            BTreeSet::new()
        };

        debug!(path = %path.display(), count = ids.len(), "Loaded processed set");

        Ok(Self {
            path,
            ids: RwLock::new(ids),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, ids: &BTreeSet<String>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let sorted: Vec<&String> = ids.iter().collect();
        let content = serde_json::to_string_pretty(&sorted)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}

impl ProcessedStore for JsonFileStore {
    fn contains(&self, video_id: &str) -> bool {
        let ids = self.ids.read().unwrap_or_else(|e| e.into_inner());
        ids.contains(video_id)
    }

    fn record(&self, video_id: &str) -> Result<bool> {
        let mut ids = self.ids.write().unwrap_or_else(|e| e.into_inner());
        if !ids.insert(video_id.to_string()) {
            return Ok(false);
        }

        // keep memory and disk in agreement if the write fails
        if let Err(e) = self.persist(&ids) {
            ids.remove(video_id);
            return Err(e);
        }

        debug!(video_id, count = ids.len(), "Recorded processed video");
        Ok(true)
    }

    fn ids(&self) -> Vec<String> {
        let ids = self.ids.read().unwrap_or_else(|e| e.into_inner());
        ids.iter().cloned().collect()
    }

    fn len(&self) -> usize {
        self.ids.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("processed.json")).unwrap();
        assert!(store.is_empty());
        assert!(!store.contains("abc123"));
    }

    #[test]
    fn test_round_trip_ignores_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("processed.json");

        let first = JsonFileStore::open(&path).unwrap();
        for id in ["v3", "v1", "v2"] {
            assert!(first.record(id).unwrap());
        }

        let second = JsonFileStore::open(&path).unwrap();
        for id in ["v2", "v3", "v1"] {
            assert!(second.record(id).is_ok());
        }

        let reloaded_a = JsonFileStore::open(&path).unwrap();
        assert_eq!(reloaded_a.ids(), vec!["v1", "v2", "v3"]);
        assert_eq!(first.ids(), second.ids());
    }

    #[test]
    fn test_file_is_sorted_pretty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("processed.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.record("b").unwrap();
        store.record("a").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[\n  \"a\",\n  \"b\"\n]");
    }

    #[test]
    fn test_duplicate_record_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("processed.json")).unwrap();

        assert!(store.record("abc123").unwrap());
        assert!(!store.record("abc123").unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "a file, not a directory").unwrap();

        let store = JsonFileStore::open(blocker.join("processed.json")).unwrap();
        assert!(store.record("abc123").is_err());
        assert!(!store.contains("abc123"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("processed.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(JsonFileStore::open(&path).is_err());
    }
}
