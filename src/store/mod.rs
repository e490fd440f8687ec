//! Processed-video store.
//!
//! Keeps the set of video ids that were already summarized and published so
//! reruns over the same playlist skip finished work.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Trait for processed-set backends.
///
/// Membership only grows during normal operation. `record` must have durably
/// persisted the new id by the time it returns `Ok`.
pub trait ProcessedStore: Send + Sync {
    /// Whether the video was already processed.
    fn contains(&self, video_id: &str) -> bool;

    /// Add a video id and persist the set. Returns `false` if it was already present.
    fn record(&self, video_id: &str) -> Result<bool>;

    /// All processed ids, sorted.
    fn ids(&self) -> Vec<String>;

    /// Number of processed ids.
    fn len(&self) -> usize {
        self.ids().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
