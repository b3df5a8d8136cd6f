//! In-memory storage backend
//!
//! A HashMap-based implementation for testing and embedding callers. The
//! engine treats it as an immutable snapshot for the duration of a search;
//! writes happen between searches, outside the core.

use std::collections::{HashMap, HashSet};

use crate::record::Bookmark;
use crate::store::error::{StoreError, StoreResult};
use crate::store::traits::{BookmarkStore, StoreStats, TagQueryStore};

/// In-memory bookmark store.
///
/// Stores records in a HashMap keyed by URL. Useful for:
/// - Unit testing
/// - Embedding in a host application that owns persistence
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, Bookmark>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Create a store from (URL, record) pairs.
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, Bookmark)>,
    {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Get a reference to all records (for testing).
    pub fn all(&self) -> &HashMap<String, Bookmark> {
        &self.records
    }

    /// Encode the whole store as a JSON snapshot.
    pub fn to_json(&self) -> StoreResult<String> {
        serde_json::to_string(&self.records).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Decode a store from a JSON snapshot produced by [`MemoryStore::to_json`].
    pub fn from_json(input: &str) -> StoreResult<Self> {
        let records =
            serde_json::from_str(input).map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(Self { records })
    }
}

impl BookmarkStore for MemoryStore {
    fn put(&mut self, url: &str, name: Option<&str>, tags: Vec<String>) {
        let name = name.filter(|n| !n.is_empty()).unwrap_or(url);
        self.records.insert(url.to_string(), Bookmark::new(name, tags));
    }

    fn get(&self, url: &str) -> Option<&Bookmark> {
        self.records.get(url)
    }

    fn remove(&mut self, url: &str) -> bool {
        self.records.remove(url).is_some()
    }

    fn urls(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn clear(&mut self) {
        self.records.clear();
    }
}

impl TagQueryStore for MemoryStore {
    fn with_tag(&self, tag: &str) -> HashSet<String> {
        self.records
            .iter()
            .filter(|(_, record)| record.has_tag(tag))
            .map(|(url, _)| url.clone())
            .collect()
    }

    fn without_tag(&self, tag: &str) -> HashSet<String> {
        self.records
            .iter()
            .filter(|(_, record)| !record.has_tag(tag))
            .map(|(url, _)| url.clone())
            .collect()
    }

    fn universe(&self) -> HashSet<String> {
        self.records.keys().cloned().collect()
    }

    fn tag_counts(&self) -> HashMap<String, usize> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for record in self.records.values() {
            for tag in &record.tags {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    fn stats(&self) -> StoreStats {
        StoreStats {
            total_records: self.records.len(),
            unique_tags: self.tag_counts().len(),
        }
    }
}
