// src/engine/reconcile.rs
//
// Merges the overlapping snapshots taken across the scroll loop into a
// single record set, keyed by a derived identity. First-seen wins:
// later observations under the same key are more likely to be
// virtualization artifacts than corrections, so they are discarded
// whole rather than merged field by field.

use std::collections::HashSet;

use crate::snapshot::{RawRecord, Snapshot};

/// A record admitted to the output set, tagged with its identity key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconciledRecord {
    pub key: String,
    pub record: RawRecord,
}

/// Derives the deduplication key by joining the named fields.
/// Absent fields contribute the empty string, so two otherwise-identical
/// partial records still collide.
pub fn identity_key(record: &RawRecord, key_fields: &[&str]) -> String {
    let mut key = String::new();
    for (i, field) in key_fields.iter().enumerate() {
        if i > 0 {
            key.push('|');
        }
        key.push_str(record.get(field));
    }
    key
}

/// Single pass over the snapshots in capture order. A record enters the
/// output the first time its key is seen, provided the filter admits it;
/// every later occurrence of the key is dropped. Output order is
/// first-seen order, which equals on-page discovery order.
pub fn reconcile(
    snapshots: &[Snapshot],
    key_fields: &[&str],
    filter: Option<fn(&RawRecord) -> bool>,
) -> Vec<ReconciledRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for snap in snapshots {
        for record in &snap.records {
            let key = identity_key(record, key_fields);
            if seen.contains(&key) {
                continue;
            }
            if let Some(f) = filter {
                if !f(record) {
                    continue;
                }
            }
            seen.insert(key.clone());
            out.push(ReconciledRecord {
                key,
                record: record.clone(),
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::ViewState;

    fn snap(records: Vec<RawRecord>) -> Snapshot {
        Snapshot {
            records,
            state: ViewState::default(),
        }
    }

    #[test]
    fn key_treats_missing_fields_as_empty() {
        let full = RawRecord::from_pairs(&[("investor", "A"), ("quantity", "10")]);
        let partial = RawRecord::from_pairs(&[("investor", "A")]);
        let fields = ["investor", "quantity", "price"];
        assert_eq!(identity_key(&full, &fields), "A|10|");
        assert_eq!(identity_key(&partial, &fields), "A||");
    }

    #[test]
    fn first_seen_version_wins_over_later_rerender() {
        let before = RawRecord::from_pairs(&[("investor", "A"), ("status", "Bought")]);
        let after = RawRecord::from_pairs(&[("investor", "A"), ("status", "")]);
        let out = reconcile(&[snap(vec![before.clone()]), snap(vec![after])], &["investor"], None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].record, before);
    }

    #[test]
    fn filter_excludes_before_admission() {
        let keep = RawRecord::from_pairs(&[("type", "Acquisition")]);
        let drop = RawRecord::from_pairs(&[("type", "holding post deal")]);
        let out = reconcile(
            &[snap(vec![keep, drop])],
            &["type"],
            Some(|r| !r.get("type").eq_ignore_ascii_case("holding post deal")),
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].record.get("type"), "Acquisition");
    }
}
