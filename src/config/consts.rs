// src/config/consts.rs

// Target site
pub const SITE_BASE: &str = "https://web.stockedge.com";

// Sink (WordPress ingest plugin). Override with SE_SINK_BASE or --sink.
pub const DEFAULT_SINK_BASE: &str = "https://profitbooking.in/wp-json/scraper/v1";
pub const SINK_BASE_ENV: &str = "SE_SINK_BASE";

// Browser
pub const NAV_TIMEOUT_SECS: u64 = 60;
pub const ROOT_WAIT_SECS: u64 = 30;
pub const WINDOW_WIDTH: u32 = 1920;
pub const WINDOW_HEIGHT: u32 = 1080;

// Scrolling
pub const NUDGE_PIXELS: i64 = 400; // secondary lazy-load trigger
pub const NUDGE_SETTLE_MS: u64 = 500;

// Delivery
pub const SINK_TIMEOUT_SECS: u64 = 30;
pub const DELIVERY_PAUSE_MS: u64 = 150; // be polite
