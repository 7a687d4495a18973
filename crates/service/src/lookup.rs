//! The shelter lookup pipeline: normalize → geocode → radius query → rank.

use std::sync::Arc;

use serde::Serialize;

use lafires_core::{normalize_address, GeoPoint, NearbyShelter, DEFAULT_RADIUS_KM};
use lafires_geocode::Geocoder;
use lafires_shelters::ShelterStore;

use crate::ServiceError;

/// What the caller gave us: an address, explicit coordinates, or both
/// (coordinates win), plus an optional radius.
#[derive(Debug, Clone, Default)]
pub struct LookupRequest {
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub radius_km: Option<f64>,
}

/// How the query point was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupSource {
    DirectCoordinates,
    GeocodedAddress,
}

/// Outcome of a shelter lookup.
#[derive(Debug, Serialize)]
pub struct LookupResult {
    pub coordinates: GeoPoint,
    pub search_radius_km: f64,
    pub source: LookupSource,
    /// Normalized form actually sent to the geocoder (address path only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub shelters: Vec<NearbyShelter>,
}

/// Read-only pipeline over a geocoder and a shelter store.
#[derive(Clone)]
pub struct ShelterLookupService {
    geocoder: Arc<dyn Geocoder>,
    store: Arc<dyn ShelterStore>,
}

impl ShelterLookupService {
    #[must_use]
    pub fn new(geocoder: Arc<dyn Geocoder>, store: Arc<dyn ShelterStore>) -> Self {
        Self { geocoder, store }
    }

    /// Runs the full pipeline.
    ///
    /// # Errors
    /// `InvalidInput` when neither an address nor a full coordinate pair
    /// is present; `AddressNotFound` when the geocoder has no match;
    /// client errors propagate unchanged. A store failure after a
    /// successful geocode fails the whole call — no partial results.
    pub async fn lookup(&self, request: LookupRequest) -> Result<LookupResult, ServiceError> {
        let radius_km = request.radius_km.unwrap_or(DEFAULT_RADIUS_KM);
        if radius_km <= 0.0 || !radius_km.is_finite() {
            return Err(ServiceError::InvalidInput(
                "distance must be a positive number of kilometers".to_owned(),
            ));
        }

        let (center, source, address) = match (request.lat, request.lon, request.address) {
            (Some(lat), Some(lon), _) => {
                let point = GeoPoint::new(lat, lon);
                if !point.is_valid() {
                    return Err(ServiceError::InvalidInput(
                        "invalid latitude or longitude values".to_owned(),
                    ));
                }
                (point, LookupSource::DirectCoordinates, None)
            },
            (_, _, Some(addr)) if !addr.trim().is_empty() => {
                let normalized = normalize_address(addr.trim());
                tracing::info!(address = %normalized, "geocoding normalized address");
                let point = match self.geocoder.geocode(&normalized).await {
                    Ok(point) => point,
                    Err(lafires_geocode::GeocodeError::NoMatch(_)) => {
                        return Err(ServiceError::AddressNotFound(normalized));
                    },
                    Err(e) => return Err(e.into()),
                };
                (point, LookupSource::GeocodedAddress, Some(normalized))
            },
            _ => {
                return Err(ServiceError::InvalidInput(
                    "either address or lat/lon parameters are required".to_owned(),
                ));
            },
        };

        let records = self.store.within_radius(center, radius_km).await?;

        // The store already filtered spatially; recompute locally so the
        // inclusive-radius invariant and the ordering never depend on
        // upstream behavior.
        let mut shelters: Vec<NearbyShelter> = records
            .into_iter()
            .filter_map(|record| NearbyShelter::from_record(record, center))
            .filter(|shelter| shelter.distance_km <= radius_km)
            .collect();
        shelters.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        tracing::info!(
            lat = center.lat,
            lon = center.lon,
            radius_km,
            count = shelters.len(),
            "shelter lookup complete"
        );

        Ok(LookupResult { coordinates: center, search_radius_km: radius_km, source, address, shelters })
    }

    /// Direct access to the underlying store, for the debug endpoint.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn ShelterStore> {
        &self.store
    }
}
