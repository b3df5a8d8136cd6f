//! Search entry point
//!
//! Wires the pipeline together: raw tag query → tokens → postfix →
//! candidate URL set → ranked results. The store is treated as an immutable
//! snapshot for the duration of one call.

use tracing::debug;

use crate::query::{evaluate, to_postfix, tokenize, QueryError};
use crate::rank::rank;
use crate::store::TagQueryStore;

/// Execute a full search against the store.
///
/// `raw_query` is the boolean tag expression (whitespace separated);
/// `url_hint` and `name_hint` are free text used only for ranking and may be
/// empty. An empty tag query selects the entire record universe, which is a
/// policy decision rather than a degenerate evaluation.
///
/// On error the whole query is rejected with no partial results; callers
/// can present either variant as one generic "invalid query" state. A valid
/// query matching nothing returns `Ok` with an empty list, which is a
/// distinct outcome from an error.
pub fn search<S: TagQueryStore>(
    store: &S,
    raw_query: &str,
    url_hint: &str,
    name_hint: &str,
) -> Result<Vec<String>, QueryError> {
    let tokens = tokenize(raw_query);
    debug!(token_count = tokens.len(), "tokenized tag query");

    let candidates = if tokens.is_empty() {
        store.universe()
    } else {
        let postfix = to_postfix(tokens)?;
        evaluate(&postfix, store)?
    };
    debug!(candidate_count = candidates.len(), "evaluated tag filter");

    let results = rank(candidates, url_hint, name_hint, store);
    debug!(result_count = results.len(), "ranked results");

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_tag_list;
    use crate::store::{BookmarkStore, MemoryStore};
    use pretty_assertions::assert_eq;

    fn test_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.put(
            "https://docs.rs",
            Some("Rust docs"),
            vec!["rust".to_string(), "reference".to_string()],
        );
        store.put("https://crates.io", Some("crates"), vec!["rust".to_string()]);
        store.put(
            "https://news.ycombinator.com",
            Some("HN"),
            vec!["news".to_string()],
        );
        store
    }

    #[test]
    fn test_empty_query_returns_universe() {
        let store = test_store();
        let results = search(&store, "", "", "").unwrap();
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_whitespace_query_returns_universe() {
        let store = test_store();
        let results = search(&store, "   ", "", "").unwrap();
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_tag_filter() {
        let store = test_store();
        let mut results = search(&store, "rust", "", "").unwrap();
        results.sort();
        assert_eq!(results, vec!["https://crates.io", "https://docs.rs"]);
    }

    #[test]
    fn test_negation_filter() {
        let store = test_store();
        let results = search(&store, "rust & !reference", "", "").unwrap();
        assert_eq!(results, vec!["https://crates.io"]);
    }

    #[test]
    fn test_precedence_in_full_search() {
        let store = test_store();
        // news | rust & reference == news | (rust & reference)
        let mut results = search(&store, "news | rust & reference", "", "").unwrap();
        results.sort();
        assert_eq!(results, vec!["https://docs.rs", "https://news.ycombinator.com"]);
    }

    #[test]
    fn test_mismatched_parens_rejected() {
        let store = test_store();
        assert_eq!(
            search(&store, "(rust & news", "", ""),
            Err(QueryError::MismatchedParentheses)
        );
        assert_eq!(
            search(&store, "rust & news)", "", ""),
            Err(QueryError::MismatchedParentheses)
        );
    }

    #[test]
    fn test_malformed_query_rejected() {
        let store = test_store();
        assert_eq!(search(&store, "&", "", ""), Err(QueryError::MalformedQuery));
        assert_eq!(
            search(&store, "rust news", "", ""),
            Err(QueryError::MalformedQuery)
        );
    }

    #[test]
    fn test_zero_results_is_not_an_error() {
        let store = test_store();
        let results = search(&store, "nosuchtag", "", "").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_ranking_applied_to_filtered_set() {
        let store = test_store();
        let results = search(&store, "rust", "docs.rs", "").unwrap();
        assert_eq!(results[0], "https://docs.rs");
    }

    #[test]
    fn test_comma_assignment_space_query_conventions() {
        // Assignment splits on commas; the search query splits on spaces.
        let mut store = MemoryStore::new();
        store.put("u1", None, parse_tag_list("foo, bar"));
        store.put("u2", None, parse_tag_list("foo"));

        let mut both = search(&store, "foo", "", "").unwrap();
        both.sort();
        assert_eq!(both, vec!["u1", "u2"]);

        let without_bar = search(&store, "!bar", "", "").unwrap();
        assert_eq!(without_bar, vec!["u2"]);
    }

    #[test]
    fn test_search_on_empty_store() {
        let store = MemoryStore::new();
        assert!(search(&store, "", "", "").unwrap().is_empty());
        assert!(search(&store, "anything", "", "").unwrap().is_empty());
    }
}
