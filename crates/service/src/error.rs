//! Typed error enum for the service layer.
//!
//! Unifies the per-client failure kinds into a single error type so the
//! HTTP layer can map on specific failure modes instead of downcasting
//! opaque boxes.

use lafires_aqi::AqiError;
use lafires_geocode::GeocodeError;
use lafires_shelters::StoreError;
use lafires_tracker::TrackerError;
use thiserror::Error;

/// Service-layer error unifying client failures and input validation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Geocoder call failed (transport, status, or malformed body).
    #[error("geocode: {0}")]
    Geocode(#[from] GeocodeError),

    /// Shelter store call failed.
    #[error("shelter store: {0}")]
    Store(#[from] StoreError),

    /// Air-quality provider call failed.
    #[error("air quality: {0}")]
    Aqi(#[from] AqiError),

    /// Status-page fetch failed.
    #[error("tracker: {0}")]
    Tracker(#[from] TrackerError),

    /// Caller provided invalid input (missing location, empty report).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The geocoder answered but found no match for the address.
    #[error("could not geocode address: {0}")]
    AddressNotFound(String),
}

impl ServiceError {
    /// Whether the underlying upstream was unreachable (503-class).
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Geocode(e) => e.is_unavailable(),
            Self::Store(e) => e.is_unavailable(),
            Self::Aqi(e) => e.is_unavailable(),
            Self::Tracker(e) => e.is_unavailable(),
            Self::InvalidInput(_) | Self::AddressNotFound(_) => false,
        }
    }

    /// Whether an upstream answered with something unusable (502-class).
    #[must_use]
    pub fn is_malformed_upstream(&self) -> bool {
        match self {
            Self::Geocode(e) => matches!(e, GeocodeError::Malformed { .. }),
            Self::Store(e) => {
                matches!(e, StoreError::Malformed { .. } | StoreError::GraphQl(_))
            },
            Self::Aqi(e) => matches!(e, AqiError::Malformed(_)),
            _ => false,
        }
    }
}
