// src/runner.rs
//
// One extraction run, end to end: open a browser session, navigate,
// wait for the list to exist, scroll to convergence, reconcile the
// snapshots, deliver the records, report. The session is owned by this
// function's scope, so the browser is torn down on every exit path.

use std::time::Duration;

use log::{info, warn};

use crate::config::consts::ROOT_WAIT_SECS;
use crate::config::options::RunOptions;
use crate::engine::{converge, reconcile, ConvergeConfig, StopReason};
use crate::error::{DeliveryError, ScrapeError};
use crate::pipeline::{deliver_all, SyncReport};
use crate::scroll::PageScroller;
use crate::sink::WordPressSink;
use crate::snapshot::{DomReader, ViewState};
use crate::specs;
use crate::view::{Session, View};

/// Fatal run failures. Per-record delivery failures are not here; they
/// land in the report.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Scrape(#[from] ScrapeError),
    #[error("sink setup: {0}")]
    Sink(#[from] DeliveryError),
}

pub fn run(opts: &RunOptions) -> Result<SyncReport, RunError> {
    let spec = specs::for_page(opts.page);
    let url = opts.url.as_deref().unwrap_or(spec.url);

    info!("extracting {} from {}", spec.name, url);
    let session = Session::open()?;
    let view = session.view();

    view.navigate(url)?;
    view.wait_for(spec.root_selector, Duration::from_secs(ROOT_WAIT_SECS))?;

    let mut driver = PageScroller::new(
        view,
        spec.scroll,
        spec.item_selector,
        Duration::from_millis(spec.settle_ms),
    );
    let mut reader = DomReader::new(view, spec.snapshot_js);
    let cfg = ConvergeConfig {
        max_iterations: spec.max_iterations,
        stall_grace: spec.stall_grace,
    };
    let boundary = spec.boundary.predicate();
    let boundary_ref: Option<&dyn Fn(&ViewState) -> bool> = match &boundary {
        Some(p) => Some(p),
        None => None,
    };

    let harvest = converge(&mut driver, &mut reader, &cfg, boundary_ref)?;
    if harvest.stop == StopReason::BudgetExhausted {
        warn!(
            "{}: scroll budget exhausted; syncing what was collected",
            spec.name
        );
    }

    let records = reconcile(&harvest.snapshots, spec.key_fields, spec.filter);
    info!(
        "{}: {} snapshots over {} iterations, {} unique records",
        spec.name,
        harvest.snapshots.len(),
        harvest.iterations,
        records.len()
    );

    let sink = WordPressSink::new(&opts.sink_base, spec.sink_route, spec.post_fields)?;
    let report = deliver_all(&records, &sink);
    info!("{}: {}", spec.name, report.summary());

    Ok(report)
}
