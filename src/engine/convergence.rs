// src/engine/convergence.rs
//
// Decides when more scrolling will yield new content versus when the
// page has truly stabilized. The site's scripts used to mix their stop
// conditions ad hoc (height unchanged here, item count there, divider
// count elsewhere); this loop folds them into one composite progress
// signal plus an optional boundary predicate.

use std::collections::HashSet;

use log::{debug, info};

use crate::error::ScrapeError;
use crate::scroll::ScrollDriver;
use crate::snapshot::{Snapshot, SnapshotReader, ViewState};

#[derive(Clone, Copy, Debug)]
pub struct ConvergeConfig {
    /// Hard cap on scroll iterations, progress or not.
    pub max_iterations: usize,
    /// Consecutive no-progress iterations tolerated before the view is
    /// declared stable.
    pub stall_grace: usize,
}

/// Why the loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// No progress for `stall_grace` consecutive iterations.
    Converged,
    /// The caller's boundary predicate fired.
    BoundaryReached,
    /// Iteration cap hit. Non-fatal: whatever was collected still flows
    /// through reconciliation and delivery.
    BudgetExhausted,
}

/// Everything the loop observed, in capture order. The reconciler needs
/// every snapshot, not just the last one: virtualized lists evict early
/// rows from the DOM as later ones render.
pub struct Harvest {
    pub snapshots: Vec<Snapshot>,
    pub stop: StopReason,
    pub iterations: usize,
}

/// An iteration makes progress if the item count grew, the scrollable
/// extent grew, or a never-before-seen group marker appeared.
fn made_progress(prev: &ViewState, next: &ViewState, seen_markers: &HashSet<String>) -> bool {
    next.item_count > prev.item_count
        || next.extent > prev.extent
        || next.markers.iter().any(|m| !seen_markers.contains(m))
}

fn note_markers(state: &ViewState, seen_markers: &mut HashSet<String>) {
    for m in &state.markers {
        seen_markers.insert(m.clone());
    }
}

/// Runs the scroll loop to convergence.
///
/// Takes an initial snapshot before the first scroll (the first
/// screenful is content too), then repeats advance → read, with one
/// nudge-and-reread before any stall is counted: some lazy loaders need
/// a secondary trigger after the main scroll.
pub fn converge(
    driver: &mut dyn ScrollDriver,
    reader: &mut dyn SnapshotReader,
    cfg: &ConvergeConfig,
    boundary: Option<&dyn Fn(&ViewState) -> bool>,
) -> Result<Harvest, ScrapeError> {
    let mut snapshots = Vec::new();
    let mut seen_markers = HashSet::new();

    let first = reader.read()?;
    note_markers(&first.state, &mut seen_markers);
    let mut prev_state = first.state.clone();
    let hit_boundary = boundary.map(|p| p(&first.state)).unwrap_or(false);
    snapshots.push(first);

    if hit_boundary {
        info!("boundary reached before scrolling");
        return Ok(Harvest {
            snapshots,
            stop: StopReason::BoundaryReached,
            iterations: 0,
        });
    }

    let mut stalls = 0usize;
    let mut iterations = 0usize;

    while iterations < cfg.max_iterations {
        iterations += 1;
        driver.advance()?;
        let mut snap = reader.read()?;

        let mut progressed = made_progress(&prev_state, &snap.state, &seen_markers);
        if !progressed {
            // Final check before counting the stall.
            driver.nudge()?;
            snap = reader.read()?;
            progressed = made_progress(&prev_state, &snap.state, &seen_markers);
        }

        debug!(
            "iteration {}: items={} extent={} markers={} progress={}",
            iterations,
            snap.state.item_count,
            snap.state.extent,
            snap.state.markers.len(),
            progressed
        );

        note_markers(&snap.state, &mut seen_markers);
        prev_state = snap.state.clone();
        let at_boundary = boundary.map(|p| p(&snap.state)).unwrap_or(false);
        snapshots.push(snap);

        if at_boundary {
            info!("boundary reached after {} iterations", iterations);
            return Ok(Harvest {
                snapshots,
                stop: StopReason::BoundaryReached,
                iterations,
            });
        }

        if progressed {
            stalls = 0;
        } else {
            stalls += 1;
            if stalls >= cfg.stall_grace {
                info!("view stable after {} iterations", iterations);
                return Ok(Harvest {
                    snapshots,
                    stop: StopReason::Converged,
                    iterations,
                });
            }
        }
    }

    info!("scroll budget exhausted at {} iterations", iterations);
    Ok(Harvest {
        snapshots,
        stop: StopReason::BudgetExhausted,
        iterations,
    })
}
