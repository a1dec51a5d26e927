//! Dashboard Application Service (Use Case)
//!
//! Fans out the three dashboard reads, joins them all-or-nothing and folds
//! the result into a `DashboardSummary`.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

use dayflow::{
    AttendanceRepository, DashboardSummary, DayWindow, DomainError, EmployeeRepository,
    LeaveRepository,
};

/// Aggregated dashboard for one request
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub window: DayWindow,
    pub generated_at: DateTime<Utc>,
    pub summary: DashboardSummary,
}

/// Application service for the admin dashboard
pub struct DashboardService {
    employees: Arc<dyn EmployeeRepository>,
    attendance: Arc<dyn AttendanceRepository>,
    leaves: Arc<dyn LeaveRepository>,
    timezone: Tz,
}

impl DashboardService {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        attendance: Arc<dyn AttendanceRepository>,
        leaves: Arc<dyn LeaveRepository>,
        timezone: Tz,
    ) -> Self {
        Self {
            employees,
            attendance,
            leaves,
            timezone,
        }
    }

    /// Today's window in the configured timezone
    pub fn today(&self, now: DateTime<Utc>) -> Result<DayWindow, DomainError> {
        DayWindow::containing(&now.with_timezone(&self.timezone))
    }

    /// Load the dashboard. The first failing read fails the whole load.
    pub async fn load(&self, now: DateTime<Utc>) -> Result<Dashboard, DomainError> {
        let window = self.today(now)?;

        let (employees, attendance, leaves) = tokio::try_join!(
            self.employees.list(true),
            self.attendance.list_between(window.start, window.end),
            self.leaves.list(None),
        )
        .inspect_err(|e| tracing::error!("❌ Dashboard aggregation failed: {}", e))?;

        let summary = DashboardSummary::fold(&employees, &attendance, leaves);

        tracing::debug!(
            "📊 Dashboard: {} employees, {} present, {} pending leaves",
            summary.total_employees,
            summary.present_today,
            summary.pending_leaves
        );

        Ok(Dashboard {
            window,
            generated_at: now,
            summary,
        })
    }
}
