use std::sync::Arc;

use anyhow::{Context, Result};

use lafires_aqi::WaqiClient;
use lafires_geocode::MapboxGeocoder;
use lafires_http::{create_router, AppState};
use lafires_service::{MissingReportsStore, ShelterLookupService};
use lafires_shelters::WeaviateShelterStore;
use lafires_tracker::CaGovTracker;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let geocoder = MapboxGeocoder::from_env().context("geocoder setup failed")?;
    let store = WeaviateShelterStore::from_env().context("shelter store setup failed")?;
    let aqi = WaqiClient::from_env().context("air-quality client setup failed")?;
    let tracker = CaGovTracker::new().context("tracker setup failed")?;

    let state = Arc::new(AppState {
        lookup: ShelterLookupService::new(Arc::new(geocoder), Arc::new(store)),
        aqi: Arc::new(aqi),
        tracker: Arc::new(tracker),
        reports: MissingReportsStore::new(),
    });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
