//! Attendance Routes - Records within a time window

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;

use dayflow::DayWindow;

use crate::models::{AttendanceQuery, AttendanceResponse};
use crate::AppState;

/// List attendance records in `[startDate, endDate)`
///
/// Missing bounds are taken from today's window in the configured timezone.
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Attendance records", body = Vec<AttendanceResponse>),
        (status = 400, description = "startDate is not before endDate"),
        (status = 401, description = "Missing or invalid API key"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    State(state): State<AppState>,
    Query(query): Query<AttendanceQuery>,
) -> Result<Json<Vec<AttendanceResponse>>, (StatusCode, String)> {
    let today = state
        .dashboard_service
        .today(Utc::now())
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let window = DayWindow::new(
        query.start_date.unwrap_or(today.start),
        query.end_date.unwrap_or(today.end),
    )
    .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let records = state
        .attendance_repo
        .list_between(window.start, window.end)
        .await
        .map_err(|e| {
            tracing::error!("❌ Failed to list attendance: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/attendance", get(list_attendance))
}
