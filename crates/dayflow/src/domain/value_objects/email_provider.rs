//! EmailProvider - Outbound email transport kinds

use serde::{Deserialize, Serialize};

/// Email transport, in selection priority order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Hosted email API (Resend)
    Resend,
    /// SMTP with explicit host
    Smtp,
    /// Simplified SMTP (Gmail service host)
    Gmail,
    /// Nothing configured; codes are written to the log
    #[serde(rename = "none")]
    Disabled,
}

impl EmailProvider {
    /// Human-readable transport label for logs
    pub fn label(&self) -> &'static str {
        match self {
            EmailProvider::Resend => "Resend API",
            EmailProvider::Smtp => "Custom SMTP",
            EmailProvider::Gmail => "Gmail SMTP",
            EmailProvider::Disabled => "Console (development)",
        }
    }
}

impl std::fmt::Display for EmailProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailProvider::Resend => write!(f, "resend"),
            EmailProvider::Smtp => write!(f, "smtp"),
            EmailProvider::Gmail => write!(f, "gmail"),
            EmailProvider::Disabled => write!(f, "none"),
        }
    }
}
