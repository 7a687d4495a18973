//! Typed error enum for the shelter store crate.

use thiserror::Error;

/// Errors from shelter store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("store returned HTTP {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("store rejected query: {0}")]
    GraphQl(String),
    #[error("malformed store response: {context}")]
    Malformed { context: String },
}

impl StoreError {
    /// Whether the store itself was unreachable, as opposed to a
    /// response this client could not make sense of.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::HttpRequest(_) => true,
            Self::HttpStatus { code, .. } => *code >= 500 || *code == 429,
            _ => false,
        }
    }
}
