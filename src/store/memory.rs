//! In-memory store implementation.
//!
//! Useful for testing and dry runs.

use super::ProcessedStore;
use crate::error::Result;
use std::collections::BTreeSet;
use std::sync::RwLock;

/// In-memory processed set. Nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    ids: RwLock<BTreeSet<String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `ids`.
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: RwLock::new(ids.into_iter().map(Into::into).collect()),
        }
    }
}

impl ProcessedStore for MemoryStore {
    fn contains(&self, video_id: &str) -> bool {
        self.ids
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains(video_id)
    }

    fn record(&self, video_id: &str) -> Result<bool> {
        Ok(self
            .ids
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(video_id.to_string()))
    }

    fn ids(&self) -> Vec<String> {
        self.ids
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::with_ids(["b"]);
        assert!(store.contains("b"));
        assert!(store.record("a").unwrap());
        assert!(!store.record("b").unwrap());
        assert_eq!(store.ids(), vec!["a", "b"]);
        assert_eq!(store.len(), 2);
    }
}
