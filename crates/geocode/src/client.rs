use async_trait::async_trait;
use serde::Deserialize;

use lafires_core::{GeoPoint, UPSTREAM_TIMEOUT_SECS};

use crate::error::GeocodeError;

const DEFAULT_BASE_URL: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";

/// Capability: free-text address → coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves `address` to a point.
    ///
    /// # Errors
    /// `NoMatch` when the geocoder finds nothing; transport and status
    /// failures otherwise.
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError>;
}

/// Mapbox Geocoding API v5 client.
pub struct MapboxGeocoder {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl std::fmt::Debug for MapboxGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxGeocoder")
            .field("token", &"***")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    /// `[longitude, latitude]` — Mapbox order, reversed on the way out.
    center: [f64; 2],
}

impl MapboxGeocoder {
    /// Creates a client with the given access token.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend
    /// failure).
    pub fn new(token: String) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
            .build()
            .map_err(|e| GeocodeError::ClientInit(e.to_string()))?;
        Ok(Self { client, token, base_url: DEFAULT_BASE_URL.to_owned() })
    }

    /// Reads the token from `MAPBOX_ACCESS_TOKEN`.
    ///
    /// # Errors
    /// `MissingToken` when the variable is unset or empty.
    pub fn from_env() -> Result<Self, GeocodeError> {
        let token = std::env::var("MAPBOX_ACCESS_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or(GeocodeError::MissingToken)?;
        Self::new(token)
    }

    /// Overrides the API base URL, for tests against a local server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    fn parse_body(address: &str, body: &str) -> Result<GeoPoint, GeocodeError> {
        let parsed: GeocodeResponse =
            serde_json::from_str(body).map_err(|e| GeocodeError::Malformed {
                context: "geocoding response".to_owned(),
                source: e,
            })?;
        let feature = parsed
            .features
            .first()
            .ok_or_else(|| GeocodeError::NoMatch(address.to_owned()))?;
        Ok(GeoPoint::new(feature.center[1], feature.center[0]))
    }
}

#[async_trait]
impl Geocoder for MapboxGeocoder {
    async fn geocode(&self, address: &str) -> Result<GeoPoint, GeocodeError> {
        let encoded = urlencoding::encode(address);
        let url = format!("{}/{}.json", self.base_url, encoded);

        tracing::debug!(address, "geocoding address");
        let response = self
            .client
            .get(&url)
            .query(&[("access_token", self.token.as_str()), ("limit", "1"), ("country", "US")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::HttpStatus { code: status.as_u16(), body });
        }

        let body = response.text().await?;
        let point = Self::parse_body(address, &body)?;
        tracing::debug!(address, lat = point.lat, lon = point.lon, "geocoded");
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_center_reversing_lon_lat_order() {
        let body = r#"{"features": [{"center": [-118.2437, 34.0522]}]}"#;
        let point = MapboxGeocoder::parse_body("downtown", body).unwrap();
        assert!((point.lat - 34.0522).abs() < 1e-9);
        assert!((point.lon + 118.2437).abs() < 1e-9);
    }

    #[test]
    fn empty_features_is_no_match() {
        let body = r#"{"features": []}"#;
        let err = MapboxGeocoder::parse_body("999 Nonexistent St", body).unwrap_err();
        assert!(matches!(err, GeocodeError::NoMatch(_)));
        assert!(!err.is_unavailable());
    }

    #[test]
    fn garbage_body_is_malformed_not_no_match() {
        let err = MapboxGeocoder::parse_body("x", "<html>oops</html>").unwrap_err();
        assert!(matches!(err, GeocodeError::Malformed { .. }));
    }

    #[test]
    fn server_errors_count_as_unavailable() {
        let err = GeocodeError::HttpStatus { code: 502, body: String::new() };
        assert!(err.is_unavailable());
        let err = GeocodeError::HttpStatus { code: 401, body: String::new() };
        assert!(!err.is_unavailable());
    }
}
