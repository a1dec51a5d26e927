//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod attendance_status;
mod email_provider;
mod leave_status;
mod otp_code;

pub use attendance_status::*;
pub use email_provider::*;
pub use leave_status::*;
pub use otp_code::*;
