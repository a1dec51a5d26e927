//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod dashboard_service;
mod notification_service;
mod otp_service;

#[cfg(test)]
pub(crate) mod testing;

pub use dashboard_service::{Dashboard, DashboardService};
pub use notification_service::{ConfigCheck, NotificationService, SendOutcome};
pub use otp_service::OtpService;
