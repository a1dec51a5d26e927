//! Employee - Staff identity with optional payroll snapshot
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employee record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub designation: String,
    /// Latest payroll, present only when the listing asked for it
    pub payroll: Option<PayrollSnapshot>,
    pub created_at: DateTime<Utc>,
}

/// Payroll figures attached to an employee listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollSnapshot {
    /// First day of the payroll month
    pub month: NaiveDate,
    pub basic_salary: Decimal,
    pub deductions: Decimal,
    pub net_salary: Decimal,
}

impl Employee {
    /// Net salary of the attached payroll; an employee without one contributes nothing
    pub fn net_salary_or_zero(&self) -> Decimal {
        self.payroll
            .as_ref()
            .map(|p| p.net_salary)
            .unwrap_or(Decimal::ZERO)
    }
}
