//! Storage trait definitions

use std::collections::{HashMap, HashSet};

use crate::record::Bookmark;

/// Core CRUD operations for bookmark records, keyed by URL.
///
/// This trait defines the minimal interface the engine needs from a storage
/// backend. The in-memory implementation covers testing and embedding
/// callers; persistent backends live with the storage collaborator.
pub trait BookmarkStore {
    /// Upsert a record.
    ///
    /// A missing or empty `name` defaults to the URL itself. The stored name
    /// and tag set are replaced atomically; there is no partial update.
    fn put(&mut self, url: &str, name: Option<&str>, tags: Vec<String>);

    /// Retrieve a record by URL.
    ///
    /// Returns `None` if not found.
    fn get(&self, url: &str) -> Option<&Bookmark>;

    /// Check whether a URL is registered.
    fn contains(&self, url: &str) -> bool {
        self.get(url).is_some()
    }

    /// Delete a record by URL.
    ///
    /// Returns `true` if the record was deleted, `false` if it didn't exist.
    fn remove(&mut self, url: &str) -> bool;

    /// Get all registered URLs.
    fn urls(&self) -> Vec<String>;

    /// Get the total record count.
    fn len(&self) -> usize {
        self.urls().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all records.
    fn clear(&mut self);
}

/// Tag-membership queries used by the boolean evaluator.
///
/// For any tag `t`, `with_tag(t)` and `without_tag(t)` partition the record
/// universe.
pub trait TagQueryStore: BookmarkStore {
    /// URLs whose record carries `tag`.
    fn with_tag(&self, tag: &str) -> HashSet<String>;

    /// URLs whose record does NOT carry `tag` (complement within the
    /// universe, not within any prior partial result).
    fn without_tag(&self, tag: &str) -> HashSet<String>;

    /// The full record universe.
    fn universe(&self) -> HashSet<String>;

    /// Tag occurrence counts across all records.
    ///
    /// Used by callers to render tag overviews.
    fn tag_counts(&self) -> HashMap<String, usize>;

    /// Get storage statistics.
    fn stats(&self) -> StoreStats;
}

/// Storage statistics
#[derive(Debug, Clone, Default)]
pub struct StoreStats {
    pub total_records: usize,
    pub unique_tags: usize,
}
