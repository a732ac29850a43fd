// benches/reconcile.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use se_scrape::engine::reconcile;
use se_scrape::snapshot::{RawRecord, Snapshot, ViewState};

/// Heavily overlapping snapshots, the shape the scroll loop produces on
/// a long deals page: each snapshot shares most of its rows with the
/// previous one.
fn overlapping_snapshots(snapshots: usize, per_snapshot: usize, step: usize) -> Vec<Snapshot> {
    (0..snapshots)
        .map(|s| {
            let base = s * step;
            Snapshot {
                records: (base..base + per_snapshot)
                    .map(|i| {
                        let investor = format!("Investor {i}");
                        let stock = format!("Stock {}", i % 97);
                        let quantity = format!("{}", 1000 + i);
                        RawRecord::from_pairs(&[
                            ("date", "12 Jun 2025"),
                            ("investor", investor.as_str()),
                            ("stockName", stock.as_str()),
                            ("quantity", quantity.as_str()),
                            ("status", if i % 2 == 0 { "Bought" } else { "Sold" }),
                        ])
                    })
                    .collect(),
                state: ViewState::default(),
            }
        })
        .collect()
}

fn bench_reconcile(c: &mut Criterion) {
    let key = ["date", "investor", "stockName", "quantity", "status"];
    let snaps = overlapping_snapshots(40, 100, 10);

    c.bench_function("reconcile_overlapping_40x100", |b| {
        b.iter(|| {
            let out = reconcile(black_box(&snaps), black_box(&key), None);
            black_box(out.len())
        })
    });
}

criterion_group!(benches, bench_reconcile);
criterion_main!(benches);
