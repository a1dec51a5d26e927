//! Leave Routes - Leave requests, newest first

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use dayflow::LeaveStatus;

use crate::models::{LeaveQuery, LeaveResponse};
use crate::AppState;

/// List leave requests
///
/// GET /api/leave?status=PENDING
#[utoipa::path(
    get,
    path = "/api/leave",
    params(LeaveQuery),
    responses(
        (status = 200, description = "Leave requests", body = Vec<LeaveResponse>),
        (status = 400, description = "Unknown status"),
        (status = 401, description = "Missing or invalid API key"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn list_leave(
    State(state): State<AppState>,
    Query(query): Query<LeaveQuery>,
) -> Result<Json<Vec<LeaveResponse>>, (StatusCode, String)> {
    let status: Option<LeaveStatus> = query
        .status
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(|e: String| (StatusCode::BAD_REQUEST, e))?;

    let leaves = state.leave_repo.list(status).await.map_err(|e| {
        tracing::error!("❌ Failed to list leave requests: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(leaves.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/leave", get(list_leave))
}
