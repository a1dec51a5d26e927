//! Dashboard Summary - Folds the three listings into headline numbers
//!
//! Pure function over already-fetched collections. Fetching (and the
//! all-or-nothing join) lives in the server's application layer.

use rust_decimal::Decimal;

use crate::domain::entities::{AttendanceRecord, Employee, LeaveRequest};

/// How many leave requests the recent-activity list keeps
pub const RECENT_LEAVE_LIMIT: usize = 5;

/// Headline numbers for the admin dashboard
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub total_employees: usize,
    pub present_today: usize,
    pub pending_leaves: usize,
    pub monthly_payroll: Decimal,
    /// Newest first, at most `RECENT_LEAVE_LIMIT`
    pub recent_leave_requests: Vec<LeaveRequest>,
}

impl DashboardSummary {
    /// Fold the employee, attendance and leave listings.
    ///
    /// `attendance` is expected to be already restricted to the day window.
    pub fn fold(
        employees: &[Employee],
        attendance: &[AttendanceRecord],
        mut leaves: Vec<LeaveRequest>,
    ) -> Self {
        let monthly_payroll: Decimal = employees.iter().map(Employee::net_salary_or_zero).sum();

        let present_today = attendance
            .iter()
            .filter(|a| a.status.counts_as_present())
            .count();

        let pending_leaves = leaves.iter().filter(|l| l.is_pending()).count();

        leaves.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        leaves.truncate(RECENT_LEAVE_LIMIT);

        Self {
            total_employees: employees.len(),
            present_today,
            pending_leaves,
            monthly_payroll,
            recent_leave_requests: leaves,
        }
    }

    /// Present-today as a percentage of headcount, one decimal place.
    /// An empty organisation reports 0.0 rather than NaN.
    pub fn attendance_rate(&self) -> f64 {
        if self.total_employees == 0 {
            return 0.0;
        }
        let rate = self.present_today as f64 / self.total_employees as f64 * 100.0;
        (rate * 10.0).round() / 10.0
    }

    pub fn attendance_rate_display(&self) -> String {
        format!("{:.1}%", self.attendance_rate())
    }

    /// Pending entries among the recent list (the badge on the recent-requests card)
    pub fn recent_pending_count(&self) -> usize {
        self.recent_leave_requests
            .iter()
            .filter(|l| l.is_pending())
            .count()
    }
}

/// Avatar initials: first character of each name part, upper-cased
pub fn initials(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
