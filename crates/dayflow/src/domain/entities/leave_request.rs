//! LeaveRequest - Employee leave application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::LeaveStatus;

/// Leave request with the requesting employee's display name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    /// Free-form leave category (e.g. "SICK", "CASUAL")
    pub leave_type: String,
    pub days: i32,
    pub status: LeaveStatus,
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    pub fn is_pending(&self) -> bool {
        self.status == LeaveStatus::Pending
    }
}
