// src/specs/bulk_deals.rs
//
// Bulk deals list on /deals. Records are grouped under date dividers;
// only the newest date group is wanted, so extraction stops as soon as
// a second distinct divider renders.
//
// Identity note: volatile display fields stay out of the key. `status`
// is part of it because the same investor can both buy and sell the
// same quantity of the same stock on one day.

use crate::scroll::ScrollMode;

use super::{Boundary, PageSpec};

const SNAPSHOT_JS: &str = r#"
(() => {
    const dividerSel = 'ion-item-divider[color="divider-header"]';
    const all = Array.from(document.querySelectorAll('ion-item[role="listitem"], ' + dividerSel));

    const markers = [];
    const items = [];
    let currentDate = '';
    let inFirstGroup = true;

    for (const el of all) {
        if (el.tagName.toLowerCase() === 'ion-item-divider') {
            const dateEl = el.querySelector('se-date-label ion-text');
            const date = dateEl ? dateEl.textContent.trim() : '';
            if (date && !markers.includes(date)) markers.push(date);
            if (markers.length > 1) inFirstGroup = false;
            currentDate = date || currentDate;
            continue;
        }
        if (!inFirstGroup) continue;

        const row = el.querySelector('ion-grid ion-row');
        if (!row) continue;
        const text = (sel) => {
            const n = row.querySelector(sel);
            return n ? n.textContent.trim() : '';
        };
        items.push({
            date: currentDate,
            investor: text('ion-col:nth-child(2) ion-text'),
            status: text('ion-col:nth-child(3) ion-chip ion-text'),
            stockName: text('ion-col:nth-child(4) ion-text'),
            quantity: text('ion-col:nth-child(6) ion-text'),
        });
    }

    return JSON.stringify({
        items,
        state: {
            itemCount: document.querySelectorAll('ion-item[role="listitem"]').length,
            extent: document.body.scrollHeight,
            markers,
        },
    });
})()
"#;

pub static SPEC: PageSpec = PageSpec {
    name: "bulk-deals",
    url: "https://web.stockedge.com/deals",
    root_selector: "ion-item-divider[color=\"divider-header\"]",
    item_selector: "ion-item[role=\"listitem\"]",
    snapshot_js: SNAPSHOT_JS,
    scroll: ScrollMode::IntoViewLast,
    settle_ms: 2000,
    max_iterations: 24,
    stall_grace: 3,
    boundary: Boundary::SecondGroup,
    key_fields: &["date", "investor", "stockName", "quantity", "status"],
    filter: None,
    sink_route: "stockedge-bulk-deals",
    post_fields: &["date", "investor", "status", "stockName", "quantity"],
};
