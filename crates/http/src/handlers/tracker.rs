use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::api_error::ApiError;
use crate::response_types::{DeadlinesResponse, ProgressResponse};
use crate::AppState;

/// `GET /api/checkprogress`
pub async fn check_progress(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProgressResponse>, ApiError> {
    let content = state.tracker.progress().await?;
    let empty = content.is_empty();
    Ok(Json(ProgressResponse { content, empty }))
}

/// `GET /api/deadlines`
pub async fn get_deadlines(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DeadlinesResponse>, ApiError> {
    let deadlines = state.tracker.deadlines().await?;
    let count = deadlines.len();
    Ok(Json(DeadlinesResponse { deadlines, count }))
}
