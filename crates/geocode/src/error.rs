//! Typed error enum for the geocoding crate.

use thiserror::Error;

/// Errors from geocoding operations.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("MAPBOX_ACCESS_TOKEN environment variable not set")]
    MissingToken,
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("geocoder returned HTTP {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("no geocoding match for address: {0}")]
    NoMatch(String),
    #[error("malformed geocoder response: {context}")]
    Malformed {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GeocodeError {
    /// Whether this error means the geocoder itself was unreachable
    /// (network failure, timeout, or 5xx), as opposed to a bad address
    /// or a broken response shape.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::HttpRequest(_) => true,
            Self::HttpStatus { code, .. } => *code >= 500 || *code == 429,
            _ => false,
        }
    }
}
