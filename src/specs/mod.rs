// src/specs/mod.rs
//! Page-specific extraction specs.
//!
//! Each spec pins down, for one StockEdge list page: where it lives, how
//! its lazy loader is triggered, how a snapshot is read out of the DOM,
//! which fields jointly identify a record, which rows are structurally
//! records but semantically unwanted, when extraction may stop early,
//! and which ingest route receives the records.
//!
//! The snapshot scripts return `JSON.stringify({ items, state })` where
//! `state` is `{ itemCount, extent, markers }`. Missing sub-elements
//! must come through as empty strings; a script never throws for
//! partial content.
//!
//! Everything else — the scroll loop, deduplication, delivery — is
//! page-agnostic and lives in the engine and pipeline.

mod bulk_deals;
mod results;
mod sast_deals;
mod sectors;

use crate::config::options::PageKind;
use crate::scroll::ScrollMode;
use crate::snapshot::RawRecord;

/// When the scroll loop may stop before the page stabilizes.
#[derive(Clone, Copy, Debug)]
pub enum Boundary {
    /// Scroll until the view converges.
    None,
    /// Stop once a second distinct group marker is visible. The deals
    /// pages only want the newest date group; everything below the
    /// second date divider is old news.
    SecondGroup,
}

impl Boundary {
    pub fn predicate(&self) -> Option<fn(&crate::snapshot::ViewState) -> bool> {
        match self {
            Boundary::None => None,
            Boundary::SecondGroup => Some(|state| state.markers.len() >= 2),
        }
    }
}

/// Everything the runner needs to extract one page.
pub struct PageSpec {
    pub name: &'static str,
    pub url: &'static str,
    /// Root list container; absence is fatal for the run.
    pub root_selector: &'static str,
    /// Individual list rows; used by the into-view scroll trigger.
    pub item_selector: &'static str,
    pub snapshot_js: &'static str,
    pub scroll: ScrollMode,
    pub settle_ms: u64,
    pub max_iterations: usize,
    pub stall_grace: usize,
    pub boundary: Boundary,
    /// Fields that jointly distinguish one logical record from another.
    /// Volatile or display-only fields stay out.
    pub key_fields: &'static [&'static str],
    /// Rows to exclude from the record set entirely.
    pub filter: Option<fn(&RawRecord) -> bool>,
    /// Ingest route under the sink base URL.
    pub sink_route: &'static str,
    /// Payload keys the ingest route expects, in order.
    pub post_fields: &'static [&'static str],
}

pub fn for_page(page: PageKind) -> &'static PageSpec {
    match page {
        PageKind::BulkDeals => &bulk_deals::SPEC,
        PageKind::SastDeals => &sast_deals::SPEC,
        PageKind::Results => &results::SPEC,
        PageKind::Sectors => &sectors::SPEC,
    }
}
