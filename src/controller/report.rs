use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError, model::report::ReportQuery, service::report::ReportService, state::AppState,
};

/// GET /report?club_id=&room_id=&date_from=&date_to=
/// Filtered report: matching meetings oldest first, with aggregate stats and
/// the filter values echoed back.
pub async fn report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let report = ReportService::new(&state.db).build(query).await?;

    Ok(Json(report))
}
