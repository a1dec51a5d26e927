//! PostgreSQL implementation of LeaveRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use dayflow::{DomainError, LeaveRepository, LeaveRequest, LeaveStatus};

/// PostgreSQL implementation of LeaveRepository
pub struct PgLeaveRepository {
    pool: PgPool,
}

impl PgLeaveRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LeaveRow {
    id: Uuid,
    employee_id: Uuid,
    employee_name: String,
    leave_type: String,
    days: i32,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<LeaveRow> for LeaveRequest {
    type Error = DomainError;

    fn try_from(row: LeaveRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<LeaveStatus>()
            .map_err(|_| DomainError::corrupt_column("leave_requests.status", &row.status))?;

        Ok(Self {
            id: row.id,
            employee_id: row.employee_id,
            employee_name: row.employee_name,
            leave_type: row.leave_type,
            days: row.days,
            status,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl LeaveRepository for PgLeaveRepository {
    async fn list(&self, status: Option<LeaveStatus>) -> Result<Vec<LeaveRequest>, DomainError> {
        let rows = sqlx::query_as::<_, LeaveRow>(
            r#"
            SELECT l.id, l.employee_id, e.full_name AS employee_name,
                   l.leave_type, l.days, l.status, l.created_at
            FROM leave_requests l
            JOIN employees e ON e.id = l.employee_id
            WHERE $1::TEXT IS NULL OR l.status = $1
            ORDER BY l.created_at DESC
            "#,
        )
        .bind(status.map(|s| s.to_string()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
