//! AttendanceStatus - Daily attendance classification

use serde::{Deserialize, Serialize};

/// Attendance status as stored (upper-case)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Present,
    Absent,
    HalfDay,
    Leave,
}

impl AttendanceStatus {
    /// Whether the employee counts as present for the day.
    /// A half day counts.
    pub fn counts_as_present(&self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::HalfDay)
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "PRESENT"),
            AttendanceStatus::Absent => write!(f, "ABSENT"),
            AttendanceStatus::HalfDay => write!(f, "HALF_DAY"),
            AttendanceStatus::Leave => write!(f, "LEAVE"),
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRESENT" => Ok(AttendanceStatus::Present),
            "ABSENT" => Ok(AttendanceStatus::Absent),
            "HALF_DAY" => Ok(AttendanceStatus::HalfDay),
            "LEAVE" => Ok(AttendanceStatus::Leave),
            _ => Err(format!("Unknown attendance status: {}", s)),
        }
    }
}
