// src/error.rs

use thiserror::Error;

/// Fatal errors for an extraction run. Any of these aborts the run;
/// the browser session is still released on the way out.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Browser could not be launched or the tab could not be opened.
    #[error("browser session: {0}")]
    Session(String),

    /// Navigation did not complete within the timeout.
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// The list's root container never appeared. Missing sub-fields on
    /// individual records are NOT this error; they read as empty strings.
    #[error("root container not found: {0}")]
    RootMissing(String),

    /// In-page script evaluation failed.
    #[error("page evaluation failed: {0}")]
    Eval(String),

    /// The snapshot script returned something we could not decode.
    #[error("unexpected snapshot shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Per-record delivery failure. Never aborts the batch; recorded in the
/// run report and the pipeline moves on to the next record.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("sink rejected record: {0}")]
    Rejected(String),
}
