//! Storage abstraction for bookmark records
//!
//! This module defines the `BookmarkStore` trait that abstracts over storage
//! backends, plus the tag-membership queries the boolean evaluator needs.
//! The engine only ever reads from a store during a search; writes are a
//! collaborator concern invoked between searches.
//!
//! # Example
//!
//! ```rust
//! use tagmark_core::store::{BookmarkStore, MemoryStore, TagQueryStore};
//!
//! let mut store = MemoryStore::new();
//! store.put("https://docs.rs", Some("Rust docs"), vec!["rust".into()]);
//!
//! assert!(store.contains("https://docs.rs"));
//! assert!(store.with_tag("rust").contains("https://docs.rs"));
//! ```

mod error;
mod memory;
mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::{BookmarkStore, StoreStats, TagQueryStore};
