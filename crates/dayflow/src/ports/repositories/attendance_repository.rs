//! Attendance Repository Port

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{errors::DomainError, AttendanceRecord};

/// Repository interface for AttendanceRecord entities
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Records whose date falls in `[start, end)`
    async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<AttendanceRecord>, DomainError>;
}
