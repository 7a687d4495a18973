//! Typed error enum for the air-quality crate.

use thiserror::Error;

/// Errors from air-quality fetches.
///
/// `Malformed` is deliberately distinct from the transport variants:
/// a provider that answers with garbage is a 502-class failure, not a
/// 503-class one.
#[derive(Debug, Error)]
pub enum AqiError {
    #[error("WAQI_API_TOKEN environment variable not set")]
    MissingToken,
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("provider returned HTTP {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("malformed provider response: {0}")]
    Malformed(String),
}

impl AqiError {
    /// Whether the provider was unreachable rather than nonsensical.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::HttpRequest(_) => true,
            Self::HttpStatus { code, .. } => *code >= 500 || *code == 429,
            _ => false,
        }
    }
}
