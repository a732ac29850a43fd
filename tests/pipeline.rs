// tests/pipeline.rs

mod common;

use common::{snap, FakeSink, SinkScript};
use se_scrape::engine::reconcile;
use se_scrape::pipeline::deliver_all;

const KEY: &[&str] = &["name"];

fn four_records() -> Vec<se_scrape::engine::ReconciledRecord> {
    let snaps = vec![
        snap(&["A", "B"], 2, 200, &[]),
        snap(&["B", "C"], 2, 300, &[]),
        snap(&["C", "D"], 2, 400, &[]),
    ];
    reconcile(&snaps, KEY, None)
}

#[test]
fn every_record_is_attempted_exactly_once_in_order() {
    let records = four_records();
    let sink = FakeSink::default();

    let report = deliver_all(&records, &sink);

    assert_eq!(report.found, 4);
    assert_eq!(report.accepted, 4);
    assert_eq!(*sink.posted.borrow(), vec!["A", "B", "C", "D"]);
}

#[test]
fn sink_side_duplicate_is_not_an_error() {
    let records = four_records();
    let sink = FakeSink::with(vec![("C", SinkScript::Duplicate)]);

    let report = deliver_all(&records, &sink);

    assert_eq!(report.accepted, 3);
    assert_eq!(report.duplicates, 1);
    assert!(report.failed.is_empty());
}

#[test]
fn a_failed_record_does_not_block_the_rest() {
    let records = four_records();
    let sink = FakeSink::with(vec![("B", SinkScript::Fail("db gone"))]);

    let report = deliver_all(&records, &sink);

    // B failed, but C and D were still attempted and recorded.
    assert_eq!(*sink.posted.borrow(), vec!["A", "B", "C", "D"]);
    assert_eq!(report.accepted, 3);
    assert_eq!(report.failed, vec![("B".to_string(), "sink rejected record: db gone".to_string())]);
}

#[test]
fn all_failures_still_produce_a_complete_report() {
    let records = four_records();
    let sink = FakeSink::with(vec![
        ("A", SinkScript::Fail("x")),
        ("B", SinkScript::Fail("x")),
        ("C", SinkScript::Fail("x")),
        ("D", SinkScript::Fail("x")),
    ]);

    let report = deliver_all(&records, &sink);

    assert_eq!(report.found, 4);
    assert_eq!(report.accepted, 0);
    assert_eq!(report.failed.len(), 4);
    assert!(report.summary().contains("failed=4"));
}

#[test]
fn empty_record_set_reports_zeroes() {
    let sink = FakeSink::default();
    let report = deliver_all(&[], &sink);

    assert_eq!(report.found, 0);
    assert_eq!(report.summary(), "found=0 accepted=0 duplicate=0 failed=0");
    assert!(sink.posted.borrow().is_empty());
}
