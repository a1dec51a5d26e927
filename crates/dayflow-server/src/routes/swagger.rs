//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    AttendanceResponse,
    ConfigCheckResponse,
    DashboardResponse,
    DashboardStats,
    DayWindowInfo,
    EmployeeResponse,
    // OTP models
    IssueOtpRequest,
    LeaveResponse,
    PayrollResponse,
    RecentLeaveRequest,
    SendOutcomeResponse,
    VerifyOtpRequest,
    VerifyOtpResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::dashboard::get_dashboard,
        super::employee::list_employees,
        super::attendance::list_attendance,
        super::leave::list_leave,
        super::otp::issue_otp,
        super::otp::verify_otp,
        super::email::check_email_config,
    ),
    info(
        title = "DayFlow HRMS API",
        version = "0.1.0",
        description = "Admin dashboard aggregation, HR listings and OTP email delivery.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Dashboard", description = "Headline numbers and recent leave activity"),
        (name = "Employees", description = "Employee listing with optional payroll"),
        (name = "Attendance", description = "Attendance records by time window"),
        (name = "Leave", description = "Leave requests"),
        (name = "OTP", description = "Email verification codes"),
        (name = "Email", description = "Email transport self-test"),
    ),
    components(
        schemas(
            // Dashboard
            DashboardResponse,
            DayWindowInfo,
            DashboardStats,
            RecentLeaveRequest,
            // Listings
            EmployeeResponse,
            PayrollResponse,
            AttendanceResponse,
            LeaveResponse,
            // OTP / Email
            IssueOtpRequest,
            VerifyOtpRequest,
            VerifyOtpResponse,
            SendOutcomeResponse,
            ConfigCheckResponse,
        )
    ),
)]
pub struct ApiDoc;
