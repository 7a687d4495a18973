use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use lafires_core::{MissingReport, MissingReportInput};

use crate::api_error::ApiError;
use crate::query_types::{Query, ReportListQuery};
use crate::response_types::ReportListResponse;
use crate::AppState;

/// `POST /api/missing`
pub async fn report_missing(
    State(state): State<Arc<AppState>>,
    Json(input): Json<MissingReportInput>,
) -> Result<Json<MissingReport>, ApiError> {
    let report = state.reports.append(input).await?;
    Ok(Json(report))
}

/// `GET /api/missing`
pub async fn list_missing(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportListQuery>,
) -> Result<Json<ReportListResponse>, ApiError> {
    let reports = state.reports.list(&query.into()).await;
    let count = reports.len();
    Ok(Json(ReportListResponse { reports, count }))
}
