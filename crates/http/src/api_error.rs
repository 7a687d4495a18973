//! Typed API error for HTTP handlers.
//!
//! Converts component-level error kinds into proper HTTP responses with
//! a JSON body and status code. Handlers return
//! `Result<Json<T>, ApiError>` instead of losing error context with a
//! bare `StatusCode`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use lafires_aqi::AqiError;
use lafires_service::ServiceError;
use lafires_shelters::StoreError;
use lafires_tracker::TrackerError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to a JSON response: `{"error": "message"}`.
///
/// `Internal` logs the real error server-side and returns a static
/// message to the client — no error detail leakage.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — missing/invalid parameters from the caller.
    BadRequest(String),
    /// 404 Not Found — address not geocodable, no matching resource.
    NotFound(String),
    /// 502 Bad Gateway — an upstream answered with an unusable response.
    BadGateway(String),
    /// 503 Service Unavailable — an upstream was unreachable or timed out.
    ServiceUnavailable(String),
    /// 500 Internal Server Error — unexpected failure. Details logged.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_unavailable() {
            tracing::warn!(error = %err, "upstream unavailable");
            return Self::ServiceUnavailable(err.to_string());
        }
        if err.is_malformed_upstream() {
            tracing::warn!(error = %err, "upstream returned malformed response");
            return Self::BadGateway(err.to_string());
        }
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::AddressNotFound(addr) => {
                Self::NotFound(format!("could not geocode address: {addr}"))
            },
            other => Self::Internal(other.into()),
        }
    }
}

impl From<AqiError> for ApiError {
    fn from(err: AqiError) -> Self {
        Self::from(ServiceError::from(err))
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::from(ServiceError::from(err))
    }
}

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        Self::from(ServiceError::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_400() {
        let api: ApiError = ServiceError::InvalidInput("missing".into()).into();
        assert!(matches!(api, ApiError::BadRequest(_)));
    }

    #[test]
    fn address_not_found_maps_to_404() {
        let api: ApiError = ServiceError::AddressNotFound("999 Nowhere".into()).into();
        assert!(matches!(api, ApiError::NotFound(_)));
    }

    #[test]
    fn unreachable_upstream_maps_to_503() {
        let api: ApiError =
            ServiceError::Store(StoreError::HttpStatus { code: 500, body: String::new() }).into();
        assert!(matches!(api, ApiError::ServiceUnavailable(_)));
    }

    #[test]
    fn malformed_upstream_maps_to_502() {
        let api: ApiError = ServiceError::Aqi(AqiError::Malformed("nonsense".into())).into();
        assert!(matches!(api, ApiError::BadGateway(_)));
    }
}
