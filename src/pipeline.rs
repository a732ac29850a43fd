// src/pipeline.rs
//
// Sequential delivery: one record at a time, one attempt per record per
// run, discovery order preserved. A failed record never blocks the rest
// of the batch.

use std::thread;
use std::time::Duration;

use log::{info, warn};

use crate::config::consts::DELIVERY_PAUSE_MS;
use crate::engine::ReconciledRecord;
use crate::sink::{RecordSink, SinkAck};

/// Terminal outcome for one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Accepted,
    DuplicateAtSink,
    Failed(String),
}

/// What one run delivered.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub found: usize,
    pub accepted: usize,
    pub duplicates: usize,
    /// Identity key and reason for every failed record.
    pub failed: Vec<(String, String)>,
}

impl SyncReport {
    pub fn summary(&self) -> String {
        format!(
            "found={} accepted={} duplicate={} failed={}",
            self.found,
            self.accepted,
            self.duplicates,
            self.failed.len()
        )
    }
}

/// Delivers every record exactly once, classifying each outcome.
pub fn deliver_all(records: &[ReconciledRecord], sink: &dyn RecordSink) -> SyncReport {
    let mut report = SyncReport {
        found: records.len(),
        ..SyncReport::default()
    };

    for (i, record) in records.iter().enumerate() {
        match deliver(record, sink) {
            DeliveryOutcome::Accepted => {
                info!("stored [{}]", record.key);
                report.accepted += 1;
            }
            DeliveryOutcome::DuplicateAtSink => {
                info!("skipped duplicate [{}]", record.key);
                report.duplicates += 1;
            }
            DeliveryOutcome::Failed(reason) => {
                warn!("failed to store [{}]: {}", record.key, reason);
                report.failed.push((record.key.clone(), reason));
            }
        }
        if i + 1 < records.len() {
            thread::sleep(Duration::from_millis(DELIVERY_PAUSE_MS));
        }
    }

    report
}

fn deliver(record: &ReconciledRecord, sink: &dyn RecordSink) -> DeliveryOutcome {
    match sink.post(record) {
        Ok(SinkAck::Accepted) => DeliveryOutcome::Accepted,
        Ok(SinkAck::Duplicate) => DeliveryOutcome::DuplicateAtSink,
        Err(e) => DeliveryOutcome::Failed(e.to_string()),
    }
}
