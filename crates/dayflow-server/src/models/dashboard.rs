//! Dashboard DTOs - Headline numbers and recent leave activity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use dayflow::{format_inr, initials, LeaveRequest, LeaveStatus};

use crate::application::Dashboard;

/// Dashboard response - everything the admin overview renders
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub window: DayWindowInfo,
    pub generated_at: DateTime<Utc>,
    pub stats: DashboardStats,
    /// Newest first, at most five
    pub recent_leave_requests: Vec<RecentLeaveRequest>,
    /// Pending entries among `recent_leave_requests`
    pub recent_pending_count: usize,
}

/// The local day the attendance numbers cover
#[derive(Debug, Serialize, ToSchema)]
pub struct DayWindowInfo {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub present_today: usize,
    pub pending_leaves: usize,
    pub monthly_payroll: Decimal,
    /// e.g. `₹4.5L`
    pub monthly_payroll_display: String,
    pub attendance_rate: f64,
    /// e.g. `87.5%`
    pub attendance_rate_display: String,
}

/// One row of the recent leave card
#[derive(Debug, Serialize, ToSchema)]
pub struct RecentLeaveRequest {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub initials: String,
    pub leave_type: String,
    pub days: i32,
    #[schema(value_type = String, example = "PENDING")]
    pub status: LeaveStatus,
    pub created_at: DateTime<Utc>,
}

impl From<LeaveRequest> for RecentLeaveRequest {
    fn from(leave: LeaveRequest) -> Self {
        Self {
            initials: initials(&leave.employee_name),
            id: leave.id,
            employee_id: leave.employee_id,
            employee_name: leave.employee_name,
            leave_type: leave.leave_type,
            days: leave.days,
            status: leave.status,
            created_at: leave.created_at,
        }
    }
}

impl From<Dashboard> for DashboardResponse {
    fn from(dashboard: Dashboard) -> Self {
        let summary = dashboard.summary;
        let stats = DashboardStats {
            total_employees: summary.total_employees,
            present_today: summary.present_today,
            pending_leaves: summary.pending_leaves,
            monthly_payroll: summary.monthly_payroll,
            monthly_payroll_display: format_inr(summary.monthly_payroll),
            attendance_rate: summary.attendance_rate(),
            attendance_rate_display: summary.attendance_rate_display(),
        };
        let recent_pending_count = summary.recent_pending_count();

        Self {
            window: DayWindowInfo {
                start: dashboard.window.start,
                end: dashboard.window.end,
            },
            generated_at: dashboard.generated_at,
            stats,
            recent_leave_requests: summary
                .recent_leave_requests
                .into_iter()
                .map(Into::into)
                .collect(),
            recent_pending_count,
        }
    }
}
