//! Fuzzy ranking of candidate bookmarks
//!
//! Orders candidates by Levenshtein distance between the URL/name hints and
//! each record's URL and stored name, with a large bonus for substring
//! containment. Name similarity weighs three times URL similarity. Lower
//! totals rank first.

use std::collections::HashSet;

use strsim::levenshtein;

use crate::store::BookmarkStore;

/// Substring containment outweighs any realistic edit distance.
const SUBSTRING_BONUS: i64 = -1000;

/// Name similarity counts three times as much as URL similarity.
const NAME_WEIGHT: i64 = 3;

/// Score one candidate string against a hint. Lower is better.
///
/// Both arguments must already be lower-cased. An empty hint grants the
/// substring bonus uniformly, so only edit distance (the value's length)
/// differentiates candidates.
fn hint_score(hint: &str, value: &str) -> i64 {
    let bonus = if value.contains(hint) {
        SUBSTRING_BONUS
    } else {
        0
    };
    levenshtein(hint, value) as i64 + bonus
}

/// Order candidate URLs by combined URL/name similarity, best first.
///
/// Comparison is case-insensitive throughout. Candidates enter the stable
/// score sort in lexicographic URL order, so equal totals break ties
/// deterministically.
pub fn rank<S: BookmarkStore>(
    candidates: HashSet<String>,
    url_hint: &str,
    name_hint: &str,
    store: &S,
) -> Vec<String> {
    let url_hint = url_hint.to_lowercase();
    let name_hint = name_hint.to_lowercase();

    let mut ordered: Vec<String> = candidates.into_iter().collect();
    ordered.sort();

    let mut scored: Vec<(i64, String)> = ordered
        .into_iter()
        .map(|url| {
            let name = store
                .get(&url)
                .map(|record| record.name.to_lowercase())
                .unwrap_or_else(|| url.to_lowercase());

            let url_score = hint_score(&url_hint, &url.to_lowercase());
            let name_score = hint_score(&name_hint, &name);
            (url_score + NAME_WEIGHT * name_score, url)
        })
        .collect();

    // Vec::sort_by_key is stable, preserving the lexicographic input order
    scored.sort_by_key(|(total, _)| *total);
    scored.into_iter().map(|(_, url)| url).collect()
}
