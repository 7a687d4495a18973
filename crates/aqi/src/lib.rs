//! Air-quality client for the fixed Los Angeles reference location.
//!
//! Fetches the current index from the WAQI feed and maps it onto the
//! EPA category scale locally.

mod client;
mod error;
mod reading;

pub use client::{AqiProvider, WaqiClient};
pub use error::AqiError;
pub use reading::{AqiCategory, AqiReading};
