// tests/common/mod.rs
#![allow(dead_code)] // each test binary uses a subset of the fakes
//
// Scripted stand-ins for the three seams: the scroll driver, the
// snapshot reader, and the record sink.

use std::cell::RefCell;
use std::collections::HashMap;

use se_scrape::engine::ReconciledRecord;
use se_scrape::error::{DeliveryError, ScrapeError};
use se_scrape::scroll::ScrollDriver;
use se_scrape::sink::{RecordSink, SinkAck};
use se_scrape::snapshot::{RawRecord, Snapshot, SnapshotReader, ViewState};

/// Driver that only counts; scrolling is simulated by the reader's
/// script instead.
#[derive(Default)]
pub struct NullDriver {
    pub advances: usize,
    pub nudges: usize,
}

impl ScrollDriver for NullDriver {
    fn advance(&mut self) -> Result<(), ScrapeError> {
        self.advances += 1;
        Ok(())
    }

    fn nudge(&mut self) -> Result<(), ScrapeError> {
        self.nudges += 1;
        Ok(())
    }
}

/// Returns the scripted snapshots one read at a time, then repeats the
/// last one forever (a stable page keeps reading the same).
pub struct ScriptedReader {
    script: Vec<Snapshot>,
    next: usize,
}

impl ScriptedReader {
    pub fn new(script: Vec<Snapshot>) -> Self {
        assert!(!script.is_empty());
        Self { script, next: 0 }
    }
}

impl SnapshotReader for ScriptedReader {
    fn read(&mut self) -> Result<Snapshot, ScrapeError> {
        let i = self.next.min(self.script.len() - 1);
        self.next += 1;
        Ok(self.script[i].clone())
    }
}

/// Builds a snapshot of single-field records plus a fingerprint.
pub fn snap(names: &[&str], item_count: u64, extent: u64, markers: &[&str]) -> Snapshot {
    Snapshot {
        records: names
            .iter()
            .map(|n| RawRecord::from_pairs(&[("name", n)]))
            .collect(),
        state: ViewState {
            item_count,
            extent,
            markers: markers.iter().map(|m| m.to_string()).collect(),
        },
    }
}

/// Per-key scripted sink responses; unscripted keys are accepted.
pub enum SinkScript {
    Duplicate,
    Fail(&'static str),
}

#[derive(Default)]
pub struct FakeSink {
    pub scripted: HashMap<String, SinkScript>,
    pub posted: RefCell<Vec<String>>,
}

impl FakeSink {
    pub fn with(scripted: Vec<(&str, SinkScript)>) -> Self {
        Self {
            scripted: scripted
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            posted: RefCell::new(Vec::new()),
        }
    }
}

impl RecordSink for FakeSink {
    fn post(&self, record: &ReconciledRecord) -> Result<SinkAck, DeliveryError> {
        self.posted.borrow_mut().push(record.key.clone());
        match self.scripted.get(&record.key) {
            None => Ok(SinkAck::Accepted),
            Some(SinkScript::Duplicate) => Ok(SinkAck::Duplicate),
            Some(SinkScript::Fail(reason)) => Err(DeliveryError::Rejected(reason.to_string())),
        }
    }
}
