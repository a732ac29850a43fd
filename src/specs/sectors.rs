// src/specs/sectors.rs
//
// Sector performance list on /sectors. Industry names are stable and
// unique on this page, so the name alone identifies a record; the
// change percentage is the payload, not part of the identity.

use crate::scroll::ScrollMode;

use super::{Boundary, PageSpec};

const SNAPSHOT_JS: &str = r#"
(() => {
    const items = [];
    for (const item of document.querySelectorAll('ion-item[se-item]')) {
        const nameEl = item.querySelector('ion-text.normal-font');
        const changeEl = item.querySelector('se-price-change-percent-label ion-text');
        items.push({
            industry: nameEl ? nameEl.textContent.trim() : '',
            change_percent: changeEl ? changeEl.textContent.trim() : '',
        });
    }

    return JSON.stringify({
        items,
        state: {
            itemCount: items.length,
            extent: document.body.scrollHeight,
            markers: [],
        },
    });
})()
"#;

pub static SPEC: PageSpec = PageSpec {
    name: "sectors",
    url: "https://web.stockedge.com/sectors",
    root_selector: "ion-item[se-item]",
    item_selector: "ion-item[se-item]",
    snapshot_js: SNAPSHOT_JS,
    scroll: ScrollMode::ToBottom,
    settle_ms: 3000,
    max_iterations: 50,
    stall_grace: 3,
    boundary: Boundary::None,
    key_fields: &["industry"],
    filter: None,
    sink_route: "stockedge-sector-data",
    post_fields: &["industry", "change_percent"],
};
