use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use lafires_core::{
    env_parse_with_default, GeoPoint, ShelterRecord, STORE_FETCH_LIMIT, UPSTREAM_TIMEOUT_SECS,
};

use crate::error::StoreError;

/// Weaviate class holding shelter objects.
pub const SHELTER_CLASS_NAME: &str = "Shelter";

const SHELTER_FIELDS: &str =
    "hotelName address bookingLink phoneNumber notes location { latitude longitude }";

/// Capability: geo-radius and bounded reads over stored shelter records.
#[async_trait]
pub trait ShelterStore: Send + Sync {
    /// Shelters whose stored location falls within `radius_km` of `center`.
    ///
    /// The spatial filter runs store-side; callers still own ranking and
    /// the inclusive radius check.
    async fn within_radius(
        &self,
        center: GeoPoint,
        radius_km: f64,
    ) -> Result<Vec<ShelterRecord>, StoreError>;

    /// Total number of stored shelter objects.
    async fn count(&self) -> Result<u64, StoreError>;

    /// First `limit` records, for operational sanity-checking.
    async fn sample(&self, limit: usize) -> Result<Vec<ShelterRecord>, StoreError>;
}

/// Shelter store backed by a Weaviate instance, queried over GraphQL.
#[derive(Debug)]
pub struct WeaviateShelterStore {
    client: reqwest::Client,
    base_url: String,
    /// Cap on how many objects a geo-radius query may pull back.
    fetch_limit: usize,
}

// ── GraphQL wire types ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<serde_json::Value>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct WireShelter {
    #[serde(rename = "hotelName", default)]
    hotel_name: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(rename = "bookingLink", default)]
    booking_link: Option<String>,
    #[serde(rename = "phoneNumber", default)]
    phone_number: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    location: Option<WireLocation>,
}

#[derive(Debug, Deserialize)]
struct WireLocation {
    latitude: f64,
    longitude: f64,
}

impl From<WireShelter> for ShelterRecord {
    fn from(wire: WireShelter) -> Self {
        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
        Self {
            hotel_name: wire.hotel_name.unwrap_or_default(),
            address: wire.address.unwrap_or_default(),
            booking_link: non_empty(wire.booking_link),
            location: wire.location.map(|l| GeoPoint::new(l.latitude, l.longitude)),
            phone_number: non_empty(wire.phone_number),
            notes: non_empty(wire.notes),
        }
    }
}

impl WeaviateShelterStore {
    /// Creates a client for the Weaviate instance at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
            .build()
            .map_err(|e| StoreError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            fetch_limit: STORE_FETCH_LIMIT,
        })
    }

    /// Reads the instance URL from `WEAVIATE_URL` (default
    /// `http://localhost:8080`) and the fetch cap from
    /// `SHELTER_FETCH_LIMIT`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, StoreError> {
        let url = std::env::var("WEAVIATE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_owned());
        let mut store = Self::new(&url)?;
        store.fetch_limit = env_parse_with_default("SHELTER_FETCH_LIMIT", STORE_FETCH_LIMIT);
        Ok(store)
    }

    async fn graphql(&self, query: String) -> Result<serde_json::Value, StoreError> {
        let response = self
            .client
            .post(format!("{}/v1/graphql", self.base_url))
            .json(&json!({ "query": query }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::HttpStatus { code: status.as_u16(), body });
        }

        let parsed: GraphQlResponse = response
            .json()
            .await
            .map_err(|_| StoreError::Malformed { context: "GraphQL envelope".to_owned() })?;

        if let Some(errors) = parsed.errors {
            let joined =
                errors.into_iter().map(|e| e.message).collect::<Vec<_>>().join("; ");
            return Err(StoreError::GraphQl(joined));
        }

        parsed
            .data
            .ok_or_else(|| StoreError::Malformed { context: "GraphQL data missing".to_owned() })
    }

    fn extract_records(data: &serde_json::Value) -> Result<Vec<ShelterRecord>, StoreError> {
        let objects = data
            .pointer(&format!("/Get/{SHELTER_CLASS_NAME}"))
            .and_then(serde_json::Value::as_array)
            .ok_or_else(|| StoreError::Malformed {
                context: format!("Get.{SHELTER_CLASS_NAME} array missing"),
            })?;

        let records = objects
            .iter()
            .filter_map(|obj| serde_json::from_value::<WireShelter>(obj.clone()).ok())
            .map(ShelterRecord::from)
            .collect();
        Ok(records)
    }
}

#[async_trait]
impl ShelterStore for WeaviateShelterStore {
    async fn within_radius(
        &self,
        center: GeoPoint,
        radius_km: f64,
    ) -> Result<Vec<ShelterRecord>, StoreError> {
        // Weaviate's WithinGeoRange takes meters.
        let max_meters = radius_km * 1000.0;
        let fetch_limit = self.fetch_limit;
        let query = format!(
            "{{ Get {{ {SHELTER_CLASS_NAME}(limit: {fetch_limit}, where: {{ \
             operator: WithinGeoRange, path: [\"location\"], \
             valueGeoRange: {{ geoCoordinates: {{ latitude: {lat}, longitude: {lon} }}, \
             distance: {{ max: {max_meters} }} }} }}) {{ {SHELTER_FIELDS} }} }} }}",
            lat = center.lat,
            lon = center.lon,
        );
        tracing::debug!(lat = center.lat, lon = center.lon, radius_km, "geo-radius query");
        let data = self.graphql(query).await?;
        Self::extract_records(&data)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let query =
            format!("{{ Aggregate {{ {SHELTER_CLASS_NAME} {{ meta {{ count }} }} }} }}");
        let data = self.graphql(query).await?;
        data.pointer(&format!("/Aggregate/{SHELTER_CLASS_NAME}/0/meta/count"))
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| StoreError::Malformed {
                context: "Aggregate meta count missing".to_owned(),
            })
    }

    async fn sample(&self, limit: usize) -> Result<Vec<ShelterRecord>, StoreError> {
        let query = format!(
            "{{ Get {{ {SHELTER_CLASS_NAME}(limit: {limit}) {{ {SHELTER_FIELDS} }} }} }}"
        );
        let data = self.graphql(query).await?;
        Self::extract_records(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_records_from_get_payload() {
        let data = json!({
            "Get": {
                "Shelter": [
                    {
                        "hotelName": "Harbor Inn",
                        "address": "100 Harbor Dr, San Pedro, CA",
                        "bookingLink": "https://example.com/book",
                        "phoneNumber": "555-0100",
                        "notes": "Pets allowed",
                        "location": {"latitude": 33.74, "longitude": -118.29}
                    },
                    {
                        "hotelName": "No Coords Motel",
                        "address": "1 Nowhere Ln",
                        "bookingLink": "",
                        "phoneNumber": null,
                        "notes": null,
                        "location": null
                    }
                ]
            }
        });
        let records = WeaviateShelterStore::extract_records(&data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].hotel_name, "Harbor Inn");
        assert!(records[0].valid_location().is_some());
        // Empty strings collapse to None on the way in
        assert!(records[1].booking_link.is_none());
        assert!(records[1].valid_location().is_none());
    }

    #[test]
    fn missing_get_array_is_malformed() {
        let data = json!({"Get": {}});
        let err = WeaviateShelterStore::extract_records(&data).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
        assert!(!err.is_unavailable());
    }

    #[test]
    fn fetch_limit_defaults_to_constant() {
        let store = WeaviateShelterStore::new("http://localhost:8080").unwrap();
        assert_eq!(store.fetch_limit, STORE_FETCH_LIMIT);
    }

    #[test]
    fn fetch_limit_honors_env_override() {
        unsafe { std::env::set_var("SHELTER_FETCH_LIMIT", "250") };
        let store = WeaviateShelterStore::from_env().unwrap();
        unsafe { std::env::remove_var("SHELTER_FETCH_LIMIT") };
        assert_eq!(store.fetch_limit, 250);
    }

    #[test]
    fn transport_failures_are_unavailable() {
        let err = StoreError::HttpStatus { code: 503, body: String::new() };
        assert!(err.is_unavailable());
        let err = StoreError::GraphQl("bad query".into());
        assert!(!err.is_unavailable());
    }
}
