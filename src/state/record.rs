/// Shared data structures for the loaded tag index
///
/// These structs represent the data model that flows between
/// the source files on disk and the UI layer.
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// One image record from a tag source file.
///
/// Records are immutable once loaded; their lifetime is one source-file
/// selection.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
pub struct TagRecord {
    /// Tags attached to the image; a record without a `tags` field
    /// is treated as having none
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Free-text caption
    #[serde(default, rename = "raw")]
    pub raw_caption: String,
    /// Base64-encoded image payload, present when the collection embeds
    /// its images instead of shipping an image directory
    #[serde(default)]
    pub encoded_bytes: Option<String>,
}

/// Mapping from image identifier to its record, loaded wholesale from one
/// source file. BTreeMap iteration is deterministic, which keeps
/// pagination stable across recomputations.
pub type TagIndex = BTreeMap<String, TagRecord>;

/// The sorted union of every tag appearing in the index.
pub fn all_tags(index: &TagIndex) -> Vec<String> {
    let mut tags = BTreeSet::new();
    for record in index.values() {
        for tag in &record.tags {
            tags.insert(tag.clone());
        }
    }
    tags.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{"tags": ["x", "y"], "raw": "a caption", "encoded_bytes": "aGk="}"#;
        let record: TagRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.tags.len(), 2);
        assert!(record.tags.contains("x"));
        assert_eq!(record.raw_caption, "a caption");
        assert_eq!(record.encoded_bytes.as_deref(), Some("aGk="));
    }

    #[test]
    fn test_missing_fields_default() {
        // A record without tags has an empty tag set, not an error
        let record: TagRecord = serde_json::from_str("{}").unwrap();

        assert!(record.tags.is_empty());
        assert!(record.raw_caption.is_empty());
        assert!(record.encoded_bytes.is_none());
    }

    #[test]
    fn test_all_tags_is_sorted_union() {
        let json = r#"{
            "a": {"tags": ["y", "x"]},
            "b": {"tags": ["x", "z"]},
            "c": {}
        }"#;
        let index: TagIndex = serde_json::from_str(json).unwrap();

        assert_eq!(all_tags(&index), vec!["x", "y", "z"]);
    }
}
