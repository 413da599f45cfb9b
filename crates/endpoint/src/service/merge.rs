//! Merging provider contributions into one `details` object

use tracing::warn;
use vitals_core::{validate_detail_key, Details};

/// Append every entry of `contribution` to `target`
///
/// Entries under a key already present are appended after the existing
/// ones; nothing is replaced, deduplicated, or reordered. Keys that break
/// the `component[:measurement]` format are still merged, with a warning.
pub fn merge_details(target: &mut Details, contribution: Details) {
    for (key, entries) in contribution {
        if let Err(e) = validate_detail_key(&key) {
            warn!(key = %key, error = %e, "merging malformed details key");
        }
        target.entry(key).or_default().extend(entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vitals_core::{DetailEntry, Status};

    fn entry(id: &str) -> DetailEntry {
        DetailEntry::new(Status::Pass).with_component_id(id)
    }

    fn details(pairs: Vec<(&str, Vec<&str>)>) -> Details {
        pairs
            .into_iter()
            .map(|(key, ids)| (key.to_string(), ids.into_iter().map(entry).collect()))
            .collect()
    }

    #[test]
    fn test_shared_key_concatenates() {
        let mut merged = Details::new();
        merge_details(&mut merged, details(vec![("uptime", vec!["system"])]));
        merge_details(&mut merged, details(vec![("uptime", vec!["process"])]));

        let ids: Vec<_> = merged["uptime"]
            .iter()
            .map(|e| e.component_id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, ["system", "process"]);
    }

    #[test]
    fn test_identical_entries_are_kept() {
        let mut merged = Details::new();
        merge_details(&mut merged, details(vec![("db", vec!["node-1"])]));
        merge_details(&mut merged, details(vec![("db", vec!["node-1"])]));
        assert_eq!(merged["db"].len(), 2);
    }

    #[test]
    fn test_key_order_is_first_seen() {
        let mut merged = Details::new();
        merge_details(&mut merged, details(vec![("b", vec!["1"]), ("a", vec!["2"])]));
        merge_details(&mut merged, details(vec![("c", vec!["3"]), ("b", vec!["4"])]));

        let keys: Vec<_> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn test_malformed_key_is_still_merged() {
        let mut merged = Details::new();
        merge_details(&mut merged, details(vec![("a:b:c", vec!["x"])]));
        assert_eq!(merged["a:b:c"].len(), 1);
    }

    #[test]
    fn test_empty_sequence_keeps_key() {
        let mut merged = Details::new();
        merge_details(&mut merged, details(vec![("idle", vec![])]));
        assert!(merged.contains_key("idle"));
        assert!(merged["idle"].is_empty());
    }

    fn contribution() -> impl Strategy<Value = Details> {
        prop::collection::vec(
            (
                prop::sample::select(vec!["db", "cache", "uptime", "queue:connections"]),
                prop::collection::vec("[a-z0-9]{1,6}", 0..4),
            ),
            0..4,
        )
        .prop_map(|pairs| {
            let mut details = Details::new();
            for (key, ids) in pairs {
                details
                    .entry(key.to_string())
                    .or_default()
                    .extend(ids.iter().map(|id| entry(id)));
            }
            details
        })
    }

    proptest! {
        #[test]
        fn proptest_merge_is_ordered_union(
            contributions in prop::collection::vec(contribution(), 0..5)
        ) {
            let mut merged = Details::new();
            for c in &contributions {
                merge_details(&mut merged, c.clone());
            }

            for c in &contributions {
                for key in c.keys() {
                    prop_assert!(merged.contains_key(key));
                }
            }

            for (key, entries) in &merged {
                let expected: Vec<DetailEntry> = contributions
                    .iter()
                    .filter_map(|c| c.get(key))
                    .flatten()
                    .cloned()
                    .collect();
                prop_assert_eq!(entries, &expected);
            }
        }
    }
}
