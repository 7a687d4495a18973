//! Shelter records as stored in the vector store and as returned to clients.

use serde::{Deserialize, Serialize};

use crate::geo::{haversine_km, GeoPoint};

/// A shelter as it exists in the external store.
///
/// The store owns the lifecycle; this API only reads. `location` is
/// optional because ingested rows occasionally lack coordinates — such
/// records never appear in proximity results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterRecord {
    #[serde(default)]
    pub hotel_name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_link: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ShelterRecord {
    /// Location, if present and usable for proximity math.
    #[must_use]
    pub fn valid_location(&self) -> Option<GeoPoint> {
        self.location.filter(GeoPoint::is_valid)
    }
}

/// A shelter paired with its distance from a query point.
///
/// Unlike [`ShelterRecord`], the location is guaranteed present: records
/// without valid coordinates are excluded before this type is built.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyShelter {
    pub hotel_name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_link: Option<String>,
    pub location: GeoPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub distance_km: f64,
}

impl NearbyShelter {
    /// Builds from a record, computing the distance to `from`.
    ///
    /// Returns `None` when the record has no valid coordinates.
    /// Distance is rounded to 2 decimals for the wire.
    #[must_use]
    pub fn from_record(record: ShelterRecord, from: GeoPoint) -> Option<Self> {
        let location = record.valid_location()?;
        let distance_km = (haversine_km(from, location) * 100.0).round() / 100.0;
        Some(Self {
            hotel_name: record.hotel_name,
            address: record.address,
            booking_link: record.booking_link,
            location,
            phone_number: record.phone_number,
            notes: record.notes,
            distance_km,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lat: f64, lon: f64) -> ShelterRecord {
        ShelterRecord {
            hotel_name: "Test Inn".into(),
            address: "1 Test Way".into(),
            booking_link: None,
            location: Some(GeoPoint::new(lat, lon)),
            phone_number: None,
            notes: None,
        }
    }

    #[test]
    fn missing_coordinates_yield_no_nearby_shelter() {
        let mut r = record(34.0, -118.0);
        r.location = None;
        assert!(NearbyShelter::from_record(r, GeoPoint::new(34.0, -118.0)).is_none());
    }

    #[test]
    fn zero_zero_coordinates_are_excluded() {
        let r = record(0.0, 0.0);
        assert!(NearbyShelter::from_record(r, GeoPoint::new(34.0, -118.0)).is_none());
    }

    #[test]
    fn distance_is_rounded_to_two_decimals() {
        let r = record(34.1, -118.3);
        let near = NearbyShelter::from_record(r, GeoPoint::new(34.0522, -118.2437)).unwrap();
        let scaled = near.distance_km * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }

    #[test]
    fn serializes_camel_case_wire_fields() {
        let near =
            NearbyShelter::from_record(record(34.1, -118.3), GeoPoint::new(34.0, -118.2)).unwrap();
        let json = serde_json::to_value(&near).unwrap();
        assert!(json.get("distanceKm").is_some());
        assert!(json.get("hotelName").is_some());
        assert!(json.get("location").and_then(|l| l.get("lat")).is_some());
    }
}
