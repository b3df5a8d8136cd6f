//! Postfix evaluation over tag-membership sets

use std::collections::HashSet;

use super::token::QueryToken;
use super::QueryError;
use crate::store::TagQueryStore;

/// Intersection of two URL sets.
fn intersect(a: HashSet<String>, b: HashSet<String>) -> HashSet<String> {
    a.into_iter().filter(|url| b.contains(url)).collect()
}

/// Union of two URL sets.
fn unite(mut a: HashSet<String>, b: HashSet<String>) -> HashSet<String> {
    a.extend(b);
    a
}

/// Evaluate a postfix token sequence against the store.
///
/// Maintains an explicit value stack of URL sets. A `Term` resolves to its
/// tag-membership set; a leading `!` selects the complement within the full
/// record universe. `And`/`Or` pop two sets and push their
/// intersection/union (both commutative, pop order irrelevant).
///
/// Returns `QueryError::MalformedQuery` on operator underflow or when the
/// final stack holds anything but exactly one set. Failure rejects the whole
/// query; there are no partial results.
///
/// The empty token sequence is the caller's concern (an empty boolean
/// expression has no canonical result) and fails here with
/// `MalformedQuery`.
pub fn evaluate<S: TagQueryStore>(
    postfix: &[QueryToken],
    store: &S,
) -> Result<HashSet<String>, QueryError> {
    let mut stack: Vec<HashSet<String>> = Vec::new();

    for token in postfix {
        match token {
            QueryToken::And | QueryToken::Or => {
                let rhs = stack.pop().ok_or(QueryError::MalformedQuery)?;
                let lhs = stack.pop().ok_or(QueryError::MalformedQuery)?;
                let combined = match token {
                    QueryToken::And => intersect(lhs, rhs),
                    _ => unite(lhs, rhs),
                };
                stack.push(combined);
            }
            QueryToken::Term(term) => {
                let set = match term.strip_prefix('!') {
                    Some(tag) => store.without_tag(tag),
                    None => store.with_tag(term),
                };
                stack.push(set);
            }
            // Parens never survive compilation
            QueryToken::LParen | QueryToken::RParen => return Err(QueryError::MalformedQuery),
        }
    }

    let result = stack.pop().ok_or(QueryError::MalformedQuery)?;
    if !stack.is_empty() {
        return Err(QueryError::MalformedQuery);
    }
    Ok(result)
}
