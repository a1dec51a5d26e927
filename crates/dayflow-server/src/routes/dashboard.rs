//! Dashboard Routes - Admin overview
//!
//! Every request recomputes from the three listings; nothing is cached.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;

use crate::models::DashboardResponse;
use crate::AppState;

/// Get the admin dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Dashboard data", body = DashboardResponse),
        (status = 401, description = "Missing or invalid API key"),
        (status = 500, description = "Failed to load dashboard")
    ),
    tag = "Dashboard"
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, (StatusCode, String)> {
    // Cause is logged by the service; callers get a flat failure
    let dashboard = state.dashboard_service.load(Utc::now()).await.map_err(|_| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to load dashboard".to_string(),
        )
    })?;

    Ok(Json(dashboard.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/dashboard", get(get_dashboard))
}
