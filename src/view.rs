// src/view.rs
//
// Browser seam. The engine only depends on this capability set, not on
// a specific automation crate; tests drive the engine through fakes.

use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;

use headless_chrome::{Browser, LaunchOptions, Tab};
use serde_json::Value;

use crate::config::consts::{NAV_TIMEOUT_SECS, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::error::ScrapeError;

/// Capability set the extraction engine needs from a browser tab.
pub trait View {
    fn navigate(&self, url: &str) -> Result<(), ScrapeError>;
    fn wait_for(&self, selector: &str, timeout: Duration) -> Result<(), ScrapeError>;
    fn eval(&self, js: &str) -> Result<Value, ScrapeError>;

    fn scroll_by(&self, dy: i64) -> Result<(), ScrapeError> {
        self.eval(&format!("window.scrollBy(0, {dy}); true"))?;
        Ok(())
    }

    fn scroll_to_bottom(&self) -> Result<(), ScrapeError> {
        self.eval("window.scrollTo(0, document.body.scrollHeight); true")?;
        Ok(())
    }

    /// Scrolls the last matching element into view. Some of the site's
    /// lists only fetch the next batch off this trigger, not off a plain
    /// window scroll.
    fn scroll_into_view_last(&self, selector: &str) -> Result<(), ScrapeError> {
        let js = format!(
            r#"(() => {{
                const items = document.querySelectorAll({selector:?});
                if (items.length > 0) {{
                    items[items.length - 1].scrollIntoView({{ behavior: 'smooth', block: 'end' }});
                }}
                return true;
            }})()"#
        );
        self.eval(&js)?;
        Ok(())
    }
}

/// `View` over a headless Chrome tab.
pub struct ChromeView {
    tab: Arc<Tab>,
}

impl View for ChromeView {
    fn navigate(&self, url: &str) -> Result<(), ScrapeError> {
        self.tab
            .navigate_to(url)
            .and_then(|t| t.wait_until_navigated())
            .map_err(|e| ScrapeError::Navigation(format!("{url}: {e}")))?;
        Ok(())
    }

    fn wait_for(&self, selector: &str, timeout: Duration) -> Result<(), ScrapeError> {
        self.tab
            .wait_for_element_with_custom_timeout(selector, timeout)
            .map_err(|e| ScrapeError::RootMissing(format!("{selector}: {e}")))?;
        Ok(())
    }

    fn eval(&self, js: &str) -> Result<Value, ScrapeError> {
        let obj = self
            .tab
            .evaluate(js, true)
            .map_err(|e| ScrapeError::Eval(e.to_string()))?;
        Ok(obj.value.unwrap_or(Value::Null))
    }
}

/// Owns the browser process for the duration of one extraction run.
/// Dropping the session tears the browser down, so the view is released
/// on every exit path, including errors.
pub struct Session {
    // Held for its Drop; the tab dies with the browser process.
    _browser: Browser,
    view: ChromeView,
}

impl Session {
    pub fn open() -> Result<Self, ScrapeError> {
        let args: Vec<&OsStr> = [
            "--no-sandbox",
            "--disable-setuid-sandbox",
            "--disable-dev-shm-usage",
            "--disable-gpu",
            "--disable-extensions",
            "--disable-blink-features=AutomationControlled",
        ]
        .iter()
        .map(OsStr::new)
        .collect();

        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((WINDOW_WIDTH, WINDOW_HEIGHT)))
            .args(args)
            .build()
            .map_err(|e| ScrapeError::Session(e.to_string()))?;

        let browser = Browser::new(options).map_err(|e| ScrapeError::Session(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| ScrapeError::Session(e.to_string()))?;
        tab.set_default_timeout(Duration::from_secs(NAV_TIMEOUT_SECS));

        Ok(Self {
            _browser: browser,
            view: ChromeView { tab },
        })
    }

    pub fn view(&self) -> &ChromeView {
        &self.view
    }

    /// Explicit teardown. Dropping the session does the same, which is
    /// what guarantees release on error paths.
    pub fn close(self) {}
}
