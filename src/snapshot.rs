// src/snapshot.rs
//
// One snapshot = the records currently in the DOM plus a structural
// fingerprint of the view. Virtualized lists evict earlier rows as new
// ones render, so a single "final" read is never enough; the engine
// keeps every snapshot and merges them later.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::ScrapeError;
use crate::view::View;

/// One record as read from the DOM: named string fields, untyped.
/// Missing sub-elements come through as empty strings, never as errors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    pub fields: BTreeMap<String, String>,
}

impl RawRecord {
    /// Field lookup; absent fields read as "".
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Structural fingerprint of the view at capture time.
///
/// `extent` is a monotonic proxy for how much content has rendered
/// (scrollable height). `markers` are the distinct group headers currently
/// present in document order, e.g. the date dividers on the deals pages.
/// Item count alone is unreliable on virtualized lists, which replace
/// rather than append nodes; extent and markers catch the cases where the
/// count stays flat but the page genuinely advanced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ViewState {
    #[serde(rename = "itemCount")]
    pub item_count: u64,
    pub extent: u64,
    #[serde(default)]
    pub markers: Vec<String>,
}

/// One point-in-time observation of the list.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub records: Vec<RawRecord>,
    pub state: ViewState,
}

/// Wire shape returned by each page's snapshot script.
#[derive(Deserialize)]
struct SnapshotPayload {
    items: Vec<RawRecord>,
    state: ViewState,
}

/// Reads the current state of the list. Pure observation; must not
/// mutate the view.
pub trait SnapshotReader {
    fn read(&mut self) -> Result<Snapshot, ScrapeError>;
}

/// DOM-backed reader: evaluates the page spec's snapshot script, which
/// returns records and fingerprint in a single round trip so they are
/// consistent with each other.
pub struct DomReader<'a> {
    view: &'a dyn View,
    snapshot_js: &'static str,
}

impl<'a> DomReader<'a> {
    pub fn new(view: &'a dyn View, snapshot_js: &'static str) -> Self {
        Self { view, snapshot_js }
    }
}

impl SnapshotReader for DomReader<'_> {
    fn read(&mut self) -> Result<Snapshot, ScrapeError> {
        // Snapshot scripts stringify their payload: CDP hands objects
        // back by reference, primitives by value.
        let value = self.view.eval(self.snapshot_js)?;
        let payload: SnapshotPayload = match value {
            serde_json::Value::String(s) => serde_json::from_str(&s)?,
            other => serde_json::from_value(other)?,
        };
        Ok(Snapshot {
            records: payload.items,
            state: payload.state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_read_as_empty() {
        let r = RawRecord::from_pairs(&[("investor", "ACME Fund")]);
        assert_eq!(r.get("investor"), "ACME Fund");
        assert_eq!(r.get("price"), "");
    }

    #[test]
    fn payload_decodes_records_and_state() {
        let value: serde_json::Value = serde_json::from_str(
            r#"{
                "items": [{"investor": "A", "quantity": "10"}],
                "state": {"itemCount": 1, "extent": 900, "markers": ["12 Jun 2025"]}
            }"#,
        )
        .unwrap();
        let payload: SnapshotPayload = serde_json::from_value(value).unwrap();
        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.items[0].get("quantity"), "10");
        assert_eq!(payload.state.item_count, 1);
        assert_eq!(payload.state.markers, vec!["12 Jun 2025"]);
    }
}
