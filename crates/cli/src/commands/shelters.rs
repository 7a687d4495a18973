use std::sync::Arc;

use anyhow::Result;

use lafires_geocode::MapboxGeocoder;
use lafires_service::{LookupRequest, ShelterLookupService};
use lafires_shelters::WeaviateShelterStore;

pub(crate) async fn run(lat: f64, lon: f64, distance: f64) -> Result<()> {
    // The geocoder is unused on the direct-coordinates path but the
    // pipeline owns both clients; wire it the same way serve does.
    let geocoder = MapboxGeocoder::from_env()?;
    let store = WeaviateShelterStore::from_env()?;
    let service = ShelterLookupService::new(Arc::new(geocoder), Arc::new(store));

    let result = service
        .lookup(LookupRequest {
            lat: Some(lat),
            lon: Some(lon),
            radius_km: Some(distance),
            ..LookupRequest::default()
        })
        .await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
