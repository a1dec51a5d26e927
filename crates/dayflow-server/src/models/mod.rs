//! DayFlow API Data Models
//!
//! - Dashboard: headline numbers and recent leave activity
//! - HR listings: employees, attendance, leave requests
//! - OTP: issue, verify and the email self-test

mod dashboard;
mod hr;
mod otp;

pub use dashboard::*;
pub use hr::*;
pub use otp::*;
