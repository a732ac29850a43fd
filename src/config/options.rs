// src/config/options.rs

use std::env;

use super::consts::{DEFAULT_SINK_BASE, SINK_BASE_ENV};

/// Which list page a run extracts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    BulkDeals,
    SastDeals,
    Results,
    Sectors,
}

impl PageKind {
    pub fn name(&self) -> &'static str {
        match self {
            PageKind::BulkDeals => "bulk-deals",
            PageKind::SastDeals => "sast-deals",
            PageKind::Results => "results",
            PageKind::Sectors => "sectors",
        }
    }

    pub fn all() -> &'static [PageKind] {
        &[
            PageKind::BulkDeals,
            PageKind::SastDeals,
            PageKind::Results,
            PageKind::Sectors,
        ]
    }
}

/// Options for one extraction run.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub page: PageKind,
    /// Overrides the spec's target URL when set.
    pub url: Option<String>,
    /// Base URL of the ingest API, without a trailing slash.
    pub sink_base: String,
}

impl RunOptions {
    pub fn new(page: PageKind) -> Self {
        let sink_base = env::var(SINK_BASE_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SINK_BASE.to_string());
        Self { page, url: None, sink_base }
    }
}
