// src/specs/sast_deals.rs
//
// SAST deals list on /deals?section=sast-deals. Same date-divider
// layout as bulk deals but a different row structure, and it carries
// "Holding Post Deal" rows that are structurally records yet not
// transactions; those are filtered out before reconciliation.

use crate::scroll::ScrollMode;
use crate::snapshot::RawRecord;

use super::{Boundary, PageSpec};

const SNAPSHOT_JS: &str = r#"
(() => {
    const markers = [];
    for (const div of document.querySelectorAll('ion-item-divider[color="divider-header"]')) {
        const dateEl = div.querySelector('se-date-label ion-text');
        const date = dateEl ? dateEl.textContent.trim() : '';
        if (date && !markers.includes(date)) markers.push(date);
    }

    const items = [];
    for (const item of document.querySelectorAll('ion-item.item-bottom-border')) {
        const chip = item.querySelector('ion-chip ion-text');
        const typeEl = item.querySelector('ion-col ion-text.small-font');
        const cols = item.querySelectorAll('ion-col');
        const colText = (i, sel) => {
            const col = cols[i];
            const n = col ? col.querySelector(sel) : null;
            return n ? n.textContent.trim() : '';
        };
        // Deal date sits in the last column; prefer the second label
        // (trade date) over the first (reporting date) when both render.
        let date = '';
        if (cols[5]) {
            const labels = cols[5].querySelectorAll('se-date-label ion-text');
            const pick = labels[1] || labels[0];
            date = pick ? pick.textContent.trim() : '';
        }
        items.push({
            investor: colText(0, 'ion-text.normal-font'),
            stockName: colText(2, 'ion-text.normal-font'),
            quantity: colText(3, 'ion-text'),
            date,
            type: typeEl ? typeEl.textContent.trim() : '',
            status: chip ? chip.textContent.trim() : '',
        });
    }

    return JSON.stringify({
        items,
        state: {
            itemCount: document.querySelectorAll('ion-item.item-bottom-border').length,
            extent: document.body.scrollHeight,
            markers,
        },
    });
})()
"#;

fn is_transaction(record: &RawRecord) -> bool {
    !record.get("type").eq_ignore_ascii_case("holding post deal")
}

pub static SPEC: PageSpec = PageSpec {
    name: "sast-deals",
    url: "https://web.stockedge.com/deals?section=sast-deals",
    root_selector: "ion-item-divider[color=\"divider-header\"]",
    item_selector: "ion-item.item-bottom-border",
    snapshot_js: SNAPSHOT_JS,
    scroll: ScrollMode::ByPixels(500),
    settle_ms: 1000,
    max_iterations: 60,
    stall_grace: 3,
    boundary: Boundary::SecondGroup,
    key_fields: &["date", "investor", "stockName", "quantity", "status"],
    filter: Some(is_transaction),
    sink_route: "stockedge-bulk-deals",
    post_fields: &["date", "investor", "stockName", "quantity", "status"],
};
