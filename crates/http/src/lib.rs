//! HTTP API server for the LA fires relief API.

mod api_error;
mod handlers;
mod query_types;
mod response_types;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use lafires_aqi::AqiProvider;
use lafires_service::{MissingReportsStore, ShelterLookupService};
use lafires_tracker::ProgressTracker;

pub use api_error::ApiError;
pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
///
/// Each external collaborator sits behind a trait object so tests can
/// swap in a double; the reports store is the only mutable member.
pub struct AppState {
    /// Geocode → radius-query → rank pipeline (owns geocoder + store).
    pub lookup: ShelterLookupService,
    /// Air-quality provider for the fixed reference location.
    pub aqi: Arc<dyn AqiProvider>,
    /// Status-page fetcher (progress content and deadlines).
    pub tracker: Arc<dyn ProgressTracker>,
    /// In-process missing-reports store.
    pub reports: MissingReportsStore,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/stayhealthy/aqi", get(handlers::aqi::get_air_quality))
        .route("/api/stayhealthy/getshelter", get(handlers::shelters::get_shelter))
        .route("/api/checkprogress", get(handlers::tracker::check_progress))
        .route("/api/deadlines", get(handlers::tracker::get_deadlines))
        .route(
            "/api/missing",
            get(handlers::missing::list_missing).post(handlers::missing::report_missing),
        )
        .route("/api/debug/shelters", get(handlers::debug::debug_shelters))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use lafires_aqi::{AqiError, AqiReading};
    use lafires_core::{GeoPoint, ShelterRecord};
    use lafires_geocode::{GeocodeError, Geocoder};
    use lafires_shelters::{ShelterStore, StoreError};
    use lafires_tracker::{Deadline, TrackerError};

    struct StubGeocoder;

    #[async_trait]
    impl Geocoder for StubGeocoder {
        async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
            if address.contains("Nonexistent") {
                Err(GeocodeError::NoMatch(address.to_owned()))
            } else {
                Ok(GeoPoint::new(34.0522, -118.2437))
            }
        }
    }

    struct StubStore {
        size: usize,
    }

    #[async_trait]
    impl ShelterStore for StubStore {
        async fn within_radius(
            &self,
            _center: GeoPoint,
            _radius_km: f64,
        ) -> Result<Vec<ShelterRecord>, StoreError> {
            Ok(Vec::new())
        }

        async fn count(&self) -> Result<u64, StoreError> {
            Ok(self.size as u64)
        }

        async fn sample(&self, _limit: usize) -> Result<Vec<ShelterRecord>, StoreError> {
            // Ignores the limit to prove the handler enforces its own cap.
            // Every other record lacks coordinates.
            Ok((0..self.size)
                .map(|i| ShelterRecord {
                    hotel_name: format!("Shelter {i}"),
                    address: format!("{i} Example St"),
                    booking_link: None,
                    location: (i % 2 == 0).then(|| GeoPoint::new(34.0, -118.0)),
                    phone_number: None,
                    notes: None,
                })
                .collect())
        }
    }

    struct DownAqi;

    #[async_trait]
    impl lafires_aqi::AqiProvider for DownAqi {
        async fn fetch(&self) -> Result<AqiReading, AqiError> {
            Err(AqiError::HttpStatus { code: 500, body: String::new() })
        }
    }

    struct DownTracker;

    #[async_trait]
    impl lafires_tracker::ProgressTracker for DownTracker {
        async fn progress(&self) -> Result<Vec<String>, TrackerError> {
            Err(TrackerError::HttpStatus { code: 502 })
        }

        async fn deadlines(&self) -> Result<Vec<Deadline>, TrackerError> {
            Err(TrackerError::HttpStatus { code: 502 })
        }
    }

    fn test_router(store_size: usize) -> Router {
        let store = Arc::new(StubStore { size: store_size });
        let state = Arc::new(AppState {
            lookup: ShelterLookupService::new(Arc::new(StubGeocoder), store),
            aqi: Arc::new(DownAqi),
            tracker: Arc::new(DownTracker),
            reports: MissingReportsStore::new(),
        });
        create_router(state)
    }

    async fn get_response(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn missing_location_input_is_400_not_500() {
        let (status, body) = get_response(test_router(0), "/api/stayhealthy/getshelter").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.get("error").is_some());
    }

    #[tokio::test]
    async fn malformed_query_number_is_json_400() {
        let (status, body) =
            get_response(test_router(0), "/api/stayhealthy/getshelter?lat=abc&lon=-118.24").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.get("error").is_some(), "rejection must use the JSON error body");
    }

    #[tokio::test]
    async fn ungeocodable_address_is_404_not_empty_200() {
        let (status, _) = get_response(
            test_router(0),
            "/api/stayhealthy/getshelter?address=999%20Nonexistent%20St",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn zero_matches_is_empty_200() {
        let (status, body) =
            get_response(test_router(0), "/api/stayhealthy/getshelter?lat=34.05&lon=-118.24")
                .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["shelter_count"], 0);
        assert_eq!(body["source"], "direct_coordinates");
    }

    #[tokio::test]
    async fn unreachable_aqi_provider_is_503() {
        let (status, body) = get_response(test_router(0), "/api/stayhealthy/aqi").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.get("error").is_some());
    }

    #[tokio::test]
    async fn unreachable_progress_page_is_503() {
        let (status, _) = get_response(test_router(0), "/api/checkprogress").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn debug_sample_is_bounded_even_when_store_over_delivers() {
        let (status, body) = get_response(test_router(100), "/api/debug/shelters").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 100);
        assert!(body["sample"].as_array().unwrap().len() <= 10);
    }

    #[tokio::test]
    async fn debug_valid_coordinates_cover_records_past_the_sample_bound() {
        // 40 records, half without coordinates; a count restricted to
        // the 10 displayed records could never reach 20.
        let (status, body) = get_response(test_router(40), "/api/debug/shelters").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid_coordinates"], 20);
        assert_eq!(body["sample"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn post_then_list_missing_reports() {
        let router = test_router(0);
        let request = Request::builder()
            .method("POST")
            .uri("/api/missing")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"name":"Rex","last_seen_location":"Altadena","contact":"555-0100"}"#,
            ))
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (status, body) = get_response(router, "/api/missing").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["reports"][0]["name"], "Rex");
        assert_eq!(body["reports"][0]["id"], 1);
    }

    #[tokio::test]
    async fn invalid_report_is_400_and_not_stored() {
        let router = test_router(0);
        let request = Request::builder()
            .method("POST")
            .uri("/api/missing")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"Rex"}"#))
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let (_, body) = get_response(router, "/api/missing").await;
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn health_answers_ok() {
        let response = test_router(0)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
