//! Response types (Serialize)

use serde::Serialize;

use lafires_core::{GeoPoint, MissingReport, NearbyShelter, ShelterRecord};
use lafires_service::{LookupResult, LookupSource};
use lafires_tracker::Deadline;

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}

/// Envelope for the shelter lookup endpoint.
#[derive(Debug, Serialize)]
pub struct ShelterLookupResponse {
    pub coordinates: GeoPoint,
    pub search_radius_km: f64,
    pub source: LookupSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub shelters: Vec<NearbyShelter>,
    pub shelter_count: usize,
}

impl From<LookupResult> for ShelterLookupResponse {
    fn from(result: LookupResult) -> Self {
        Self {
            coordinates: result.coordinates,
            search_radius_km: result.search_radius_km,
            source: result.source,
            address: result.address,
            shelter_count: result.shelters.len(),
            shelters: result.shelters,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub content: Vec<String>,
    /// Explicit no-content indicator: the page answered but nothing
    /// survived extraction.
    pub empty: bool,
}

#[derive(Debug, Serialize)]
pub struct DeadlinesResponse {
    pub deadlines: Vec<Deadline>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ReportListResponse {
    pub reports: Vec<MissingReport>,
    pub count: usize,
}

/// Bounded sample for the debug endpoint — never the full dataset.
#[derive(Debug, Serialize)]
pub struct DebugSheltersResponse {
    pub count: u64,
    /// Records with usable coordinates, counted over the capped fetch
    /// rather than just the displayed sample.
    pub valid_coordinates: usize,
    pub sample: Vec<ShelterRecord>,
}
