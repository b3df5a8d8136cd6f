//! Boolean tag query engine
//!
//! Pipeline: raw text → [`tokenize`] → [`to_postfix`] → [`evaluate`].
//!
//! # Grammar
//!
//! ```text
//! query ::= term | query '&' query | query '|' query | '(' query ')'
//! term  ::= TAG | '!' TAG
//! ```
//!
//! `&` binds tighter than `|`; both are left-associative. Terms resolve to
//! sets of URLs at evaluation time, so the whole expression is set algebra
//! over the record universe.
//!
//! # Example
//!
//! ```rust
//! use tagmark_core::query::{evaluate, to_postfix, tokenize};
//! use tagmark_core::store::{BookmarkStore, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! store.put("https://docs.rs", None, vec!["rust".into(), "docs".into()]);
//! store.put("https://crates.io", None, vec!["rust".into()]);
//!
//! let postfix = to_postfix(tokenize("rust & !docs")).unwrap();
//! let matches = evaluate(&postfix, &store).unwrap();
//! assert!(matches.contains("https://crates.io"));
//! assert!(!matches.contains("https://docs.rs"));
//! ```

mod compiler;
mod eval;
mod token;
mod tokenizer;

pub use compiler::to_postfix;
pub use eval::evaluate;
pub use token::QueryToken;
pub use tokenizer::tokenize;

use thiserror::Error;

/// Query rejection reasons.
///
/// Callers typically surface both variants as a single generic "invalid
/// query" indication; the kind is preserved for those that distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Bracket imbalance detected during compilation
    #[error("mismatched parentheses in tag query")]
    MismatchedParentheses,

    /// Operator/operand arity violation detected during evaluation
    #[error("malformed tag query")]
    MalformedQuery,
}
