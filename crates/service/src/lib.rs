//! Service layer for the relief API.
//!
//! Centralizes business logic between HTTP handlers and the external
//! clients: the geocode → radius-query → rank pipeline for shelters,
//! and the in-process missing-reports store.

mod error;
mod lookup;
mod reports;

pub use error::ServiceError;
pub use lookup::{LookupRequest, LookupResult, LookupSource, ShelterLookupService};
pub use reports::MissingReportsStore;
