use async_trait::async_trait;
use serde::Deserialize;

use lafires_core::UPSTREAM_TIMEOUT_SECS;

use crate::error::AqiError;
use crate::reading::AqiReading;

const DEFAULT_FEED_URL: &str = "https://api.waqi.info/feed/losangeles/";

/// Capability: current air-quality reading for the reference location.
#[async_trait]
pub trait AqiProvider: Send + Sync {
    async fn fetch(&self) -> Result<AqiReading, AqiError>;
}

/// WAQI (aqicn.org) feed client.
pub struct WaqiClient {
    client: reqwest::Client,
    token: String,
    feed_url: String,
}

impl std::fmt::Debug for WaqiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaqiClient")
            .field("token", &"***")
            .field("feed_url", &self.feed_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct FeedResponse {
    status: String,
    #[serde(default)]
    data: Option<FeedData>,
}

#[derive(Debug, Deserialize)]
struct FeedData {
    // WAQI reports "-" instead of a number when the station is down,
    // so this cannot deserialize straight into a u32.
    aqi: serde_json::Value,
}

impl WaqiClient {
    /// Creates a client with the given API token.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(token: String) -> Result<Self, AqiError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
            .build()
            .map_err(|e| AqiError::ClientInit(e.to_string()))?;
        Ok(Self { client, token, feed_url: DEFAULT_FEED_URL.to_owned() })
    }

    /// Reads the token from `WAQI_API_TOKEN`.
    ///
    /// # Errors
    /// `MissingToken` when the variable is unset or empty.
    pub fn from_env() -> Result<Self, AqiError> {
        let token = std::env::var("WAQI_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or(AqiError::MissingToken)?;
        Self::new(token)
    }

    /// Overrides the feed URL, for tests against a local server.
    #[must_use]
    pub fn with_feed_url(mut self, feed_url: String) -> Self {
        self.feed_url = feed_url;
        self
    }

    fn parse_body(body: &str) -> Result<AqiReading, AqiError> {
        let feed: FeedResponse = serde_json::from_str(body)
            .map_err(|e| AqiError::Malformed(format!("feed body: {e}")))?;
        if feed.status != "ok" {
            return Err(AqiError::Malformed(format!("feed status: {}", feed.status)));
        }
        let index = feed
            .data
            .and_then(|d| d.aqi.as_u64())
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| AqiError::Malformed("aqi value missing or non-numeric".to_owned()))?;
        Ok(AqiReading::from_index(index))
    }
}

#[async_trait]
impl AqiProvider for WaqiClient {
    async fn fetch(&self) -> Result<AqiReading, AqiError> {
        let response = self
            .client
            .get(&self.feed_url)
            .query(&[("token", self.token.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AqiError::HttpStatus { code: status.as_u16(), body });
        }

        let body = response.text().await?;
        let reading = Self::parse_body(&body)?;
        tracing::debug!(index = reading.index, "fetched air-quality reading");
        Ok(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::AqiCategory;

    #[test]
    fn parses_ok_feed() {
        let reading = WaqiClient::parse_body(r#"{"status":"ok","data":{"aqi":57}}"#).unwrap();
        assert_eq!(reading.index, 57);
        assert_eq!(reading.category, AqiCategory::Moderate);
    }

    #[test]
    fn error_status_is_malformed() {
        let err =
            WaqiClient::parse_body(r#"{"status":"error","data":"Invalid key"}"#).unwrap_err();
        assert!(matches!(err, AqiError::Malformed(_)));
        assert!(!err.is_unavailable());
    }

    #[test]
    fn dash_aqi_is_malformed_not_zero() {
        let err = WaqiClient::parse_body(r#"{"status":"ok","data":{"aqi":"-"}}"#).unwrap_err();
        assert!(matches!(err, AqiError::Malformed(_)));
    }

    #[test]
    fn transport_and_5xx_are_unavailable() {
        assert!(AqiError::HttpStatus { code: 500, body: String::new() }.is_unavailable());
        assert!(!AqiError::HttpStatus { code: 404, body: String::new() }.is_unavailable());
    }
}
