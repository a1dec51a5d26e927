//! DayFlow API Routes
//!
//! - /api/dashboard - Admin overview (headline numbers, recent leave)
//! - /api/employees - Employee listing, optionally with payroll
//! - /api/attendance - Attendance records by window
//! - /api/leave - Leave requests by status
//! - /api/otp - Email verification codes
//! - /api/email/check - Email transport self-test

pub mod attendance;
pub mod dashboard;
pub mod email;
pub mod employee;
pub mod leave;
pub mod otp;
pub mod swagger;

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::{self, ApiKey};
use crate::AppState;

/// Full application router: public health and docs, key-protected `/api`
pub fn app(state: AppState, api_key: ApiKey) -> Router {
    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .merge(dashboard::router())
        .merge(employee::router())
        .merge(attendance::router())
        .merge(leave::router())
        .merge(otp::router())
        .merge(email::router())
        .layer(middleware::from_fn_with_state(api_key, auth::auth_middleware));

    // OpenAPI documentation
    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(crate::health_check))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{
        attendance_record, employee, leave_request, FakeAttendance, FakeEmployees, FakeLeaves,
    };
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use chrono::Utc;
    use chrono_tz::Tz;
    use dayflow::{AttendanceStatus, LeaveStatus};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(employees: FakeEmployees, attendance: FakeAttendance, leaves: FakeLeaves) -> AppState {
        AppState::new(
            Arc::new(employees),
            Arc::new(attendance),
            Arc::new(leaves),
            None,
            Tz::UTC,
        )
    }

    fn populated() -> AppState {
        state(
            FakeEmployees::new(vec![employee(Some(300_000)), employee(Some(200_000))]),
            FakeAttendance::new(vec![attendance_record(Utc::now(), AttendanceStatus::Present)]),
            FakeLeaves::new(vec![
                leave_request(LeaveStatus::Pending, 1),
                leave_request(LeaveStatus::Approved, 2),
                leave_request(LeaveStatus::Rejected, 3),
            ]),
        )
    }

    async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_dashboard() {
        let (status, body) = call(app(populated(), ApiKey::default()), get("/api/dashboard")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stats"]["total_employees"], 2);
        assert_eq!(body["stats"]["present_today"], 1);
        assert_eq!(body["stats"]["pending_leaves"], 1);
        assert_eq!(body["stats"]["monthly_payroll_display"], "₹5.0L");
        assert_eq!(body["stats"]["attendance_rate_display"], "50.0%");
        assert_eq!(body["recent_pending_count"], 1);

        let recent = body["recent_leave_requests"].as_array().unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0]["status"], "PENDING");
        assert_eq!(recent[0]["initials"], "RK");
    }

    #[tokio::test]
    async fn test_dashboard_failure_is_generic() {
        let state = state(
            FakeEmployees::new(vec![]),
            FakeAttendance::new(vec![]),
            FakeLeaves::failing("relation \"leave_requests\" does not exist"),
        );

        let (status, body) = call(app(state, ApiKey::default()), get("/api/dashboard")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, Value::String("Failed to load dashboard".to_string()));
    }

    #[tokio::test]
    async fn test_api_requires_key_but_health_does_not() {
        let key = || ApiKey::new(Some("secret".to_string()));

        let (status, _) = call(app(populated(), key()), get("/api/dashboard")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let request = Request::builder()
            .uri("/api/dashboard")
            .header(header::AUTHORIZATION, "Bearer secret")
            .body(Body::empty())
            .unwrap();
        let (status, _) = call(app(populated(), key()), request).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = call(app(populated(), key()), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_employees_payroll_is_opt_in() {
        let (_, body) = call(app(populated(), ApiKey::default()), get("/api/employees")).await;
        assert!(body[0]["payroll"].is_null());

        let (status, body) = call(
            app(populated(), ApiKey::default()),
            get("/api/employees?includePayroll=true"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["payroll"]["net_salary"], "300000");
    }

    #[tokio::test]
    async fn test_leave_status_filter_is_exact() {
        let (status, body) =
            call(app(populated(), ApiKey::default()), get("/api/leave?status=PENDING")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, _) =
            call(app(populated(), ApiKey::default()), get("/api/leave?status=pending")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = call(app(populated(), ApiKey::default()), get("/api/leave")).await;
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_attendance_window() {
        let (status, body) = call(app(populated(), ApiKey::default()), get("/api/attendance")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, _) = call(
            app(populated(), ApiKey::default()),
            get("/api/attendance?startDate=2026-03-11T00:00:00Z&endDate=2026-03-10T00:00:00Z"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_otp_flow_without_transport() {
        let app = app(populated(), ApiKey::default());

        let (status, body) = call(
            app.clone(),
            post_json(
                "/api/otp",
                serde_json::json!({ "email": "asha@example.com", "name": "Asha" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let (status, body) = call(
            app.clone(),
            post_json(
                "/api/otp/verify",
                serde_json::json!({ "email": "asha@example.com", "code": "not-it" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["verified"], false);

        let (status, _) = call(
            app,
            post_json("/api/otp", serde_json::json!({ "email": "nope", "name": "Asha" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_email_check_without_transport() {
        let (status, body) =
            call(app(populated(), ApiKey::default()), get("/api/email/check")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["provider"], "none");
    }
}
