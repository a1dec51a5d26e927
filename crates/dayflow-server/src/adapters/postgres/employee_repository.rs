//! PostgreSQL implementation of EmployeeRepository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use dayflow::{DomainError, Employee, EmployeeRepository, PayrollSnapshot};

/// PostgreSQL implementation of EmployeeRepository
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping. Payroll columns are NULL when
/// payroll was not requested or the employee has none.
#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: Uuid,
    full_name: String,
    email: String,
    department: String,
    designation: String,
    created_at: DateTime<Utc>,
    payroll_month: Option<NaiveDate>,
    basic_salary: Option<Decimal>,
    deductions: Option<Decimal>,
    net_salary: Option<Decimal>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        let payroll = row.payroll_month.map(|month| PayrollSnapshot {
            month,
            basic_salary: row.basic_salary.unwrap_or_default(),
            deductions: row.deductions.unwrap_or_default(),
            net_salary: row.net_salary.unwrap_or_default(),
        });

        Self {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            department: row.department,
            designation: row.designation,
            payroll,
            created_at: row.created_at,
        }
    }
}

const LIST_EMPLOYEES: &str = r#"
    SELECT e.id, e.full_name, e.email, e.department, e.designation, e.created_at,
           NULL::DATE AS payroll_month,
           NULL::NUMERIC AS basic_salary,
           NULL::NUMERIC AS deductions,
           NULL::NUMERIC AS net_salary
    FROM employees e
    ORDER BY e.full_name
"#;

const LIST_EMPLOYEES_WITH_PAYROLL: &str = r#"
    SELECT e.id, e.full_name, e.email, e.department, e.designation, e.created_at,
           p.month AS payroll_month, p.basic_salary, p.deductions, p.net_salary
    FROM employees e
    LEFT JOIN LATERAL (
        SELECT month, basic_salary, deductions, net_salary
        FROM payrolls
        WHERE payrolls.employee_id = e.id
        ORDER BY month DESC
        LIMIT 1
    ) p ON TRUE
    ORDER BY e.full_name
"#;

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn list(&self, include_payroll: bool) -> Result<Vec<Employee>, DomainError> {
        let query = if include_payroll {
            LIST_EMPLOYEES_WITH_PAYROLL
        } else {
            LIST_EMPLOYEES
        };

        let rows = sqlx::query_as::<_, EmployeeRow>(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
