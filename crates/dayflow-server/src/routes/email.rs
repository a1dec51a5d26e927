//! Email Routes - Transport self-test

use axum::{extract::State, routing::get, Json, Router};

use crate::models::ConfigCheckResponse;
use crate::AppState;

/// Check the configured email transport without sending anything
#[utoipa::path(
    get,
    path = "/api/email/check",
    responses(
        (status = 200, description = "Self-test result", body = ConfigCheckResponse),
        (status = 401, description = "Missing or invalid API key")
    ),
    tag = "Email"
)]
pub async fn check_email_config(State(state): State<AppState>) -> Json<ConfigCheckResponse> {
    Json(state.notification_service.check_config().await.into())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/email/check", get(check_email_config))
}
