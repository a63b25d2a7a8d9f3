/// Tag-subset filtering
use std::collections::BTreeSet;

use crate::state::record::TagIndex;

/// Ids of every image whose tag set contains all of `required`, in index
/// iteration order.
///
/// An empty requirement selects nothing: the browser shows images only
/// once at least one tag has been chosen.
pub fn filter(index: &TagIndex, required: &BTreeSet<String>) -> Vec<String> {
    if required.is_empty() {
        return Vec::new();
    }

    index
        .iter()
        .filter(|(_, record)| required.is_subset(&record.tags))
        .map(|(id, _)| id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::record::TagRecord;

    fn index(entries: &[(&str, &[&str])]) -> TagIndex {
        entries
            .iter()
            .map(|(id, tags)| {
                (
                    id.to_string(),
                    TagRecord {
                        tags: tags.iter().map(|t| t.to_string()).collect(),
                        ..TagRecord::default()
                    },
                )
            })
            .collect()
    }

    fn required(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_requirement_selects_nothing() {
        let index = index(&[("a", &["x", "y"]), ("b", &["x"])]);

        assert!(filter(&index, &required(&[])).is_empty());
    }

    #[test]
    fn test_subset_containment() {
        let index = index(&[("a", &["x", "y"]), ("b", &["x"]), ("c", &["y", "z"])]);

        assert_eq!(filter(&index, &required(&["x"])), vec!["a", "b"]);
        assert_eq!(filter(&index, &required(&["x", "y"])), vec!["a"]);
        assert_eq!(filter(&index, &required(&["z"])), vec!["c"]);
    }

    #[test]
    fn test_every_match_contains_requirement() {
        let index = index(&[
            ("a", &["x", "y"]),
            ("b", &["x"]),
            ("c", &["y", "z"]),
            ("d", &[]),
        ]);
        let wanted = required(&["x", "y"]);

        let matched = filter(&index, &wanted);
        for id in &matched {
            assert!(wanted.is_subset(&index[id].tags));
        }

        // And every omitted id violates the containment
        for id in index.keys() {
            if !matched.contains(id) {
                assert!(!wanted.is_subset(&index[id].tags));
            }
        }
    }

    #[test]
    fn test_untagged_record_never_matches() {
        let index = index(&[("bare", &[]), ("tagged", &["x"])]);

        assert_eq!(filter(&index, &required(&["x"])), vec!["tagged"]);
    }

    #[test]
    fn test_unknown_tag_matches_nothing() {
        let index = index(&[("a", &["x"])]);

        assert!(filter(&index, &required(&["missing"])).is_empty());
    }

    #[test]
    fn test_preserves_index_order() {
        let index = index(&[("c", &["x"]), ("a", &["x"]), ("b", &["x"])]);

        // BTreeMap iterates lexicographically
        assert_eq!(filter(&index, &required(&["x"])), vec!["a", "b", "c"]);
    }
}
