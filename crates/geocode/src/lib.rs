//! Mapbox forward-geocoding client.
//!
//! Converts a free-text address into a `GeoPoint`. Exposed behind the
//! [`Geocoder`] trait so the lookup pipeline can be tested with a double.

mod client;
mod error;

pub use client::{Geocoder, MapboxGeocoder};
pub use error::GeocodeError;
