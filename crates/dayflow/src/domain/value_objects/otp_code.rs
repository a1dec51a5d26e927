//! OtpCode - Six-digit one-time passcode

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of digits in a passcode
pub const OTP_DIGITS: usize = 6;

/// One-time passcode, always `OTP_DIGITS` ASCII digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OtpCode(String);

impl OtpCode {
    /// Draw a fresh code from the v4 UUID generator
    pub fn generate() -> Self {
        let n = Uuid::new_v4().as_u128() % 10u128.pow(OTP_DIGITS as u32);
        Self(format!("{:0width$}", n, width = OTP_DIGITS))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare against user input, ignoring surrounding whitespace
    pub fn matches(&self, input: &str) -> bool {
        self.0 == input.trim()
    }
}

impl std::fmt::Display for OtpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for OtpCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() == OTP_DIGITS && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(format!("OTP must be {} digits", OTP_DIGITS))
        }
    }
}
