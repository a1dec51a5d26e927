//! Listing DTOs - Employees, attendance and leave requests

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use dayflow::{
    AttendanceRecord, AttendanceStatus, Employee, LeaveRequest, LeaveStatus, PayrollSnapshot,
};

// ============================================
// Employees
// ============================================

/// Employee listing query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EmployeeQuery {
    /// Attach each employee's latest payroll (default: false)
    #[serde(default)]
    pub include_payroll: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PayrollResponse {
    pub month: NaiveDate,
    pub basic_salary: Decimal,
    pub deductions: Decimal,
    pub net_salary: Decimal,
}

impl From<PayrollSnapshot> for PayrollResponse {
    fn from(p: PayrollSnapshot) -> Self {
        Self {
            month: p.month,
            basic_salary: p.basic_salary,
            deductions: p.deductions,
            net_salary: p.net_salary,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub designation: String,
    pub payroll: Option<PayrollResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            full_name: e.full_name,
            email: e.email,
            department: e.department,
            designation: e.designation,
            payroll: e.payroll.map(Into::into),
            created_at: e.created_at,
        }
    }
}

// ============================================
// Attendance
// ============================================

/// Attendance listing query. Both bounds default to today's window.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AttendanceQuery {
    /// Inclusive lower bound (RFC 3339)
    pub start_date: Option<DateTime<Utc>>,
    /// Exclusive upper bound (RFC 3339)
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceResponse {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub date: DateTime<Utc>,
    #[schema(value_type = String, example = "PRESENT")]
    pub status: AttendanceStatus,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
}

impl From<AttendanceRecord> for AttendanceResponse {
    fn from(a: AttendanceRecord) -> Self {
        Self {
            id: a.id,
            employee_id: a.employee_id,
            date: a.date,
            status: a.status,
            check_in: a.check_in,
            check_out: a.check_out,
        }
    }
}

// ============================================
// Leave
// ============================================

/// Leave listing query
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaveQuery {
    /// Exact status filter: PENDING, APPROVED or REJECTED
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaveResponse {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub leave_type: String,
    pub days: i32,
    #[schema(value_type = String, example = "PENDING")]
    pub status: LeaveStatus,
    pub created_at: DateTime<Utc>,
}

impl From<LeaveRequest> for LeaveResponse {
    fn from(l: LeaveRequest) -> Self {
        Self {
            id: l.id,
            employee_id: l.employee_id,
            employee_name: l.employee_name,
            leave_type: l.leave_type,
            days: l.days,
            status: l.status,
            created_at: l.created_at,
        }
    }
}
