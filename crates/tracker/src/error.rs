//! Typed error enum for the tracker crate.

use thiserror::Error;

/// Errors from status-page fetches.
///
/// Extraction itself never errors — structural drift degrades to
/// best-effort text — so every variant here is a fetch failure.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("page returned HTTP {code}")]
    HttpStatus { code: u16 },
}

impl TrackerError {
    /// All fetch failures read as upstream-unavailable to API callers.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, Self::ClientInit(_))
    }
}
