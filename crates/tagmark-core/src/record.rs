//! Bookmark record type and tag-list parsing

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A stored bookmark: display name plus tag set.
///
/// The URL key lives in the store map, not on the record. Tags are a true
/// set; duplicates collapse on construction. Tags serialize as a list so
/// snapshots stay plain JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub name: String,
    pub tags: HashSet<String>,
}

impl Bookmark {
    /// Create a record with a display name and tags.
    pub fn new<I, S>(name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Check tag membership (case-sensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Split a comma-separated tag assignment string into tags.
///
/// Bookmark assignment separates tags with commas (`"foo, bar"`), while the
/// search query splits on whitespace; the two conventions are deliberately
/// distinct. Entries are trimmed and empties dropped, so `","` or a trailing
/// comma never produce an empty tag.
pub fn parse_tag_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_duplicate_tags_collapse() {
        let record = Bookmark::new("Example", vec!["rust", "rust", "web"]);
        assert_eq!(record.tags.len(), 2);
        assert!(record.has_tag("rust"));
        assert!(record.has_tag("web"));
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let record = Bookmark::new("Example", vec!["Rust"]);
        assert!(record.has_tag("Rust"));
        assert!(!record.has_tag("rust"));
    }

    #[test]
    fn test_parse_tag_list() {
        assert_eq!(parse_tag_list("foo, bar"), vec!["foo", "bar"]);
        assert_eq!(parse_tag_list("foo,bar,baz"), vec!["foo", "bar", "baz"]);
        assert_eq!(parse_tag_list("foo, "), vec!["foo"]);
        assert_eq!(parse_tag_list(""), Vec::<String>::new());
        assert_eq!(parse_tag_list(" , , "), Vec::<String>::new());
    }

    #[test]
    fn test_serde_round_trip() {
        let record = Bookmark::new("Docs", vec!["rust", "reference"]);
        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: Bookmark = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_tags_serialize_as_list() {
        let record = Bookmark::new("Docs", vec!["rust"]);
        let value: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert!(value["tags"].is_array());
    }
}
