//! Request/query types (Deserialize) and the query-string extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use lafires_core::ReportFilter;
use lafires_service::LookupRequest;

use crate::api_error::ApiError;

/// [`axum::extract::Query`] with its rejection rewritten into this
/// API's `{"error": ...}` JSON body, so a malformed query string
/// (`?lat=abc`) answers like every other client error.
pub struct Query<T>(pub T);

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Query::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
        }
    }
}

/// Query string for `/api/stayhealthy/getshelter`.
///
/// At least one of `address` or the `lat`/`lon` pair must be present;
/// that contract is enforced by the lookup pipeline, not here.
#[derive(Debug, Deserialize)]
pub struct ShelterQuery {
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Search radius in kilometers; the pipeline defaults it when absent.
    pub distance: Option<f64>,
}

impl From<ShelterQuery> for LookupRequest {
    fn from(query: ShelterQuery) -> Self {
        Self {
            address: query.address,
            lat: query.lat,
            lon: query.lon,
            radius_km: query.distance,
        }
    }
}

/// Query string for `GET /api/missing`.
#[derive(Debug, Default, Deserialize)]
pub struct ReportListQuery {
    pub name: Option<String>,
    pub location: Option<String>,
}

impl From<ReportListQuery> for ReportFilter {
    fn from(query: ReportListQuery) -> Self {
        Self { name: query.name, location: query.location }
    }
}
