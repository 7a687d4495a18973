use anyhow::Result;
use serde_json::json;

use lafires_core::normalize_address;
use lafires_geocode::{Geocoder, MapboxGeocoder};

pub(crate) async fn run(address: &str) -> Result<()> {
    let geocoder = MapboxGeocoder::from_env()?;
    let normalized = normalize_address(address.trim());
    let point = geocoder.geocode(&normalized).await?;
    let out = json!({
        "address": address,
        "normalized": normalized,
        "lat": point.lat,
        "lon": point.lon,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
