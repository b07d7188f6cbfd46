// src/error.rs
use std::io;

use thiserror::Error;

/// Everything that can go wrong while scraping.
///
/// Per-URL failures (`Network`, `Status`, `Timeout`, `Parse`) are absorbed by the
/// runner into an all-empty row. Only link-list and output failures end a run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("link list has no `{0}` column")]
    MissingColumn(&'static str),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string()).unwrap_or_default();
        if e.is_timeout() {
            ScrapeError::Timeout { url }
        } else if let Some(status) = e.status() {
            ScrapeError::Status { url, status: status.as_u16() }
        } else if e.is_decode() || e.is_body() {
            ScrapeError::Parse(e.to_string())
        } else {
            ScrapeError::Network(e)
        }
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
