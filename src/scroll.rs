// src/scroll.rs

use std::thread;
use std::time::Duration;

use crate::config::consts::{NUDGE_PIXELS, NUDGE_SETTLE_MS};
use crate::error::ScrapeError;
use crate::view::View;

/// How one scroll step is performed. The convergence engine does not
/// care which; lazy loaders on different pages respond to different
/// triggers.
#[derive(Clone, Copy, Debug)]
pub enum ScrollMode {
    /// Jump straight to the bottom of the document.
    ToBottom,
    /// Scroll down by a fixed pixel delta.
    ByPixels(i64),
    /// Scroll the last list item into view.
    IntoViewLast,
}

/// Issues scroll actions against the view and waits out the settle
/// interval for asynchronous content injection. Advancing a view that
/// is already at the bottom is a safe no-op apart from the settle time.
pub trait ScrollDriver {
    /// One full scroll step followed by the settle delay.
    fn advance(&mut self) -> Result<(), ScrapeError>;

    /// A short supplementary scroll with a shorter settle, used as a
    /// secondary lazy-load trigger before a stall is counted.
    fn nudge(&mut self) -> Result<(), ScrapeError>;
}

/// DOM-backed driver.
pub struct PageScroller<'a> {
    view: &'a dyn View,
    mode: ScrollMode,
    item_selector: &'static str,
    settle: Duration,
}

impl<'a> PageScroller<'a> {
    pub fn new(
        view: &'a dyn View,
        mode: ScrollMode,
        item_selector: &'static str,
        settle: Duration,
    ) -> Self {
        Self {
            view,
            mode,
            item_selector,
            settle,
        }
    }
}

impl ScrollDriver for PageScroller<'_> {
    fn advance(&mut self) -> Result<(), ScrapeError> {
        match self.mode {
            ScrollMode::ToBottom => self.view.scroll_to_bottom()?,
            ScrollMode::ByPixels(dy) => self.view.scroll_by(dy)?,
            ScrollMode::IntoViewLast => self.view.scroll_into_view_last(self.item_selector)?,
        }
        thread::sleep(self.settle);
        Ok(())
    }

    fn nudge(&mut self) -> Result<(), ScrapeError> {
        self.view.scroll_by(NUDGE_PIXELS)?;
        thread::sleep(Duration::from_millis(NUDGE_SETTLE_MS));
        Ok(())
    }
}
