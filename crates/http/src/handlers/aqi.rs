use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use lafires_aqi::AqiReading;

use crate::api_error::ApiError;
use crate::AppState;

/// `GET /api/stayhealthy/aqi`
pub async fn get_air_quality(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AqiReading>, ApiError> {
    let reading = state.aqi.fetch().await?;
    Ok(Json(reading))
}
