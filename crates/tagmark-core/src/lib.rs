//! Tagmark Core Engine
//!
//! The computational core of a personal bookmark index. Records are URL →
//! (name, tag set) entries; retrieval combines a boolean tag expression
//! (`rust & !reference`, `(news | blog) & tech`) with fuzzy name/URL
//! matching for ordering.
//!
//! The engine never performs I/O. Callers hand it a [`store::TagQueryStore`]
//! snapshot and get back an ordered list of URLs; persistence and UI belong
//! to collaborators.
//!
//! # Example
//!
//! ```rust
//! use tagmark_core::search;
//! use tagmark_core::store::{BookmarkStore, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! store.put("https://docs.rs", Some("Rust docs"), vec!["rust".into(), "reference".into()]);
//! store.put("https://crates.io", None, vec!["rust".into()]);
//!
//! let results = search(&store, "rust & !reference", "", "").unwrap();
//! assert_eq!(results, vec!["https://crates.io"]);
//! ```

pub mod query;
pub mod rank;
pub mod record;
pub mod search;
pub mod store;

// Re-export main types at crate root
pub use query::{evaluate, to_postfix, tokenize, QueryError, QueryToken};
pub use rank::rank;
pub use record::{parse_tag_list, Bookmark};
pub use search::search;
pub use store::{BookmarkStore, MemoryStore, StoreError, StoreStats, TagQueryStore};
