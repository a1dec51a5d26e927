//! PostgreSQL implementation of AttendanceRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use dayflow::{AttendanceRecord, AttendanceRepository, AttendanceStatus, DomainError};

/// PostgreSQL implementation of AttendanceRepository
pub struct PgAttendanceRepository {
    pool: PgPool,
}

impl PgAttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AttendanceRow {
    id: Uuid,
    employee_id: Uuid,
    date: DateTime<Utc>,
    status: String,
    check_in: Option<DateTime<Utc>>,
    check_out: Option<DateTime<Utc>>,
}

impl TryFrom<AttendanceRow> for AttendanceRecord {
    type Error = DomainError;

    fn try_from(row: AttendanceRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<AttendanceStatus>()
            .map_err(|_| DomainError::corrupt_column("attendance.status", &row.status))?;

        Ok(Self {
            id: row.id,
            employee_id: row.employee_id,
            date: row.date,
            status,
            check_in: row.check_in,
            check_out: row.check_out,
        })
    }
}

#[async_trait]
impl AttendanceRepository for PgAttendanceRepository {
    async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<AttendanceRecord>, DomainError> {
        let rows = sqlx::query_as::<_, AttendanceRow>(
            r#"
            SELECT id, employee_id, date, status, check_in, check_out
            FROM attendance
            WHERE date >= $1 AND date < $2
            ORDER BY date, employee_id
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
