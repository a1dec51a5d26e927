//! Employee Routes - Read-only listing

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::models::{EmployeeQuery, EmployeeResponse};
use crate::AppState;

/// List employees
///
/// GET /api/employees?includePayroll=true
#[utoipa::path(
    get,
    path = "/api/employees",
    params(EmployeeQuery),
    responses(
        (status = 200, description = "List of employees", body = Vec<EmployeeResponse>),
        (status = 401, description = "Missing or invalid API key"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employees"
)]
pub async fn list_employees(
    State(state): State<AppState>,
    Query(query): Query<EmployeeQuery>,
) -> Result<Json<Vec<EmployeeResponse>>, (StatusCode, String)> {
    let employees = state
        .employee_repo
        .list(query.include_payroll)
        .await
        .map_err(|e| {
            tracing::error!("❌ Failed to list employees: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/employees", get(list_employees))
}
