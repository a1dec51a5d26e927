//! Domain Services
//!
//! Pure logic over domain entities: the dashboard fold, day windows,
//! rupee formatting, the OTP email template and the TTL cache.

mod currency;
mod dashboard;
mod day_window;
mod otp_email;
mod ttl_cache;

pub use currency::*;
pub use dashboard::*;
pub use day_window::*;
pub use otp_email::*;
pub use ttl_cache::*;
