use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use lafires_core::{DEBUG_SAMPLE_LIMIT, STORE_FETCH_LIMIT};

use crate::api_error::ApiError;
use crate::response_types::DebugSheltersResponse;
use crate::AppState;

/// `GET /api/debug/shelters`
///
/// Operational sanity check: aggregate count, how many ingested records
/// carry usable coordinates, and a bounded sample. The coordinate check
/// runs over the full capped fetch so bad rows past the sample bound
/// still show up in the number; only the displayed sample is cut to
/// `DEBUG_SAMPLE_LIMIT`. Unauthenticated, so the cap is enforced here
/// regardless of what the store hands back.
pub async fn debug_shelters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DebugSheltersResponse>, ApiError> {
    let store = state.lookup.store();
    let count = store.count().await?;
    let mut records = store.sample(STORE_FETCH_LIMIT).await?;
    records.truncate(STORE_FETCH_LIMIT);
    let valid_coordinates = records.iter().filter(|s| s.valid_location().is_some()).count();
    let mut sample = records;
    sample.truncate(DEBUG_SAMPLE_LIMIT);
    Ok(Json(DebugSheltersResponse { count, valid_coordinates, sample }))
}
