//! OTP Routes - Email verification codes

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use chrono::Utc;

use dayflow::DomainError;

use crate::models::{IssueOtpRequest, SendOutcomeResponse, VerifyOtpRequest, VerifyOtpResponse};
use crate::AppState;

/// Issue a verification code and email it
///
/// A delivery failure is reported in the body with `success = false`.
#[utoipa::path(
    post,
    path = "/api/otp",
    request_body = IssueOtpRequest,
    responses(
        (status = 200, description = "Delivery outcome", body = SendOutcomeResponse),
        (status = 400, description = "Invalid email or name"),
        (status = 401, description = "Missing or invalid API key")
    ),
    tag = "OTP"
)]
pub async fn issue_otp(
    State(state): State<AppState>,
    Json(payload): Json<IssueOtpRequest>,
) -> Result<Json<SendOutcomeResponse>, (StatusCode, String)> {
    let outcome = state
        .otp_service
        .issue(&payload.email, &payload.name, Utc::now())
        .await
        .map_err(|e| match e {
            DomainError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        })?;

    Ok(Json(outcome.into()))
}

/// Verify a code; a successful match consumes it
#[utoipa::path(
    post,
    path = "/api/otp/verify",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "Verification result", body = VerifyOtpResponse),
        (status = 401, description = "Missing or invalid API key")
    ),
    tag = "OTP"
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(payload): Json<VerifyOtpRequest>,
) -> Json<VerifyOtpResponse> {
    let verified = state
        .otp_service
        .verify(&payload.email, &payload.code, Utc::now())
        .await;

    Json(VerifyOtpResponse { verified })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/otp", post(issue_otp))
        .route("/api/otp/verify", post(verify_otp))
}
