// src/specs/results.rs
//
// Released quarterly results on /daily-updates. No group dividers here;
// the list just grows until the lazy loader runs dry.

use crate::scroll::ScrollMode;

use super::{Boundary, PageSpec};

const SNAPSHOT_JS: &str = r#"
(() => {
    const today = new Date().toISOString().split('T')[0];
    const items = [];
    for (const item of document.querySelectorAll('ion-item[se-item]')) {
        const text = (sel) => {
            const n = item.querySelector(sel);
            return n ? n.textContent.trim() : '';
        };
        let marketCap = '';
        for (const el of item.querySelectorAll('ion-text.small-font')) {
            if (el.textContent.includes('MCap:') && el.nextElementSibling) {
                marketCap = el.nextElementSibling.textContent.trim();
                break;
            }
        }
        items.push({
            date: today,
            companyName: text('.normal-font'),
            quarterInfo: text('ion-text[id*="released-result-Qtr-txt"]'),
            marketCap,
            salesValue: text('div[id*="released-result-SALES-txt"] ion-text'),
            salesGrowth: text('ion-text[id*="released-result-SALESZG-txt"]'),
            ebitdaValue: text('div[id*="released-result-EBITDA-txt"] ion-text'),
            ebitdaGrowth: text('ion-text[id*="released-result-EBITDAZG-txt"]'),
            profitValue: text('ion-col:nth-child(4) div:first-child ion-text'),
            profitGrowth: text('ion-text[id*="released-result-ProfitZG-txt"]'),
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
    name: "results",
    url: "https://web.stockedge.com/daily-updates?section=released-results&result-type=QoQ",
    root_selector: "ion-item[se-item]",
    item_selector: "ion-item[se-item]",
    snapshot_js: SNAPSHOT_JS,
    scroll: ScrollMode::ToBottom,
    settle_ms: 2000,
    max_iterations: 30,
    stall_grace: 2,
    boundary: Boundary::None,
    key_fields: &["companyName", "quarterInfo"],
    filter: None,
    sink_route: "stockedge-results",
    post_fields: &[
        "date",
        "companyName",
        "quarterInfo",
        "marketCap",
        "salesValue",
        "salesGrowth",
        "ebitdaValue",
        "ebitdaGrowth",
        "profitValue",
        "profitGrowth",
    ],
};
