//! Core types for the LA fires relief API
//!
//! This crate contains domain types shared across all other crates.

mod constants;
mod env_config;
mod geo;
mod normalize;
mod report;
mod shelter;

pub use constants::*;
pub use env_config::env_parse_with_default;
pub use geo::{haversine_km, GeoPoint};
pub use normalize::normalize_address;
pub use report::{MissingReport, MissingReportInput, ReportFilter};
pub use shelter::{NearbyShelter, ShelterRecord};
