use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::api_error::ApiError;
use crate::query_types::{Query, ShelterQuery};
use crate::response_types::ShelterLookupResponse;
use crate::AppState;

/// `GET /api/stayhealthy/getshelter`
pub async fn get_shelter(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ShelterQuery>,
) -> Result<Json<ShelterLookupResponse>, ApiError> {
    let result = state.lookup.lookup(query.into()).await?;
    Ok(Json(result.into()))
}
