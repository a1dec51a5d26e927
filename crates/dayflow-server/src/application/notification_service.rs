//! Notification Application Service
//!
//! Sends the OTP email through whichever transport was selected at startup.
//! With no transport the code is written to the log instead.

use std::sync::Arc;

use dayflow::{render_otp_email, EmailProvider, Mailer, OtpCode};

/// Result of one delivery attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl SendOutcome {
    fn delivered() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            success: false,
            error: Some(error),
        }
    }
}

/// Result of the transport self-test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigCheck {
    pub success: bool,
    pub error: Option<String>,
    pub provider: EmailProvider,
}

/// Application service for outbound notifications
pub struct NotificationService {
    mailer: Option<Arc<dyn Mailer>>,
}

impl NotificationService {
    pub fn new(mailer: Option<Arc<dyn Mailer>>) -> Self {
        Self { mailer }
    }

    pub fn provider(&self) -> EmailProvider {
        self.mailer
            .as_ref()
            .map_or(EmailProvider::Disabled, |m| m.provider())
    }

    /// Send the verification code to `to`. One attempt, no retry.
    pub async fn send_otp(&self, to: &str, otp: &OtpCode, name: &str) -> SendOutcome {
        let Some(mailer) = &self.mailer else {
            log_console_otp(to, otp, name);
            return SendOutcome::delivered();
        };

        let email = render_otp_email(to, name, otp);

        match mailer.send(&email).await {
            Ok(receipt) => {
                tracing::info!(
                    "✅ OTP email sent via {} to {} (message id: {})",
                    mailer.provider().label(),
                    to,
                    receipt.message_id.as_deref().unwrap_or("-")
                );
                SendOutcome::delivered()
            }
            Err(e) => {
                tracing::error!(
                    "❌ Failed to send OTP email via {} to {}: {}",
                    mailer.provider().label(),
                    to,
                    e
                );
                SendOutcome::failed(e.to_string())
            }
        }
    }

    /// Check the selected transport without sending anything
    pub async fn check_config(&self) -> ConfigCheck {
        let Some(mailer) = &self.mailer else {
            return ConfigCheck {
                success: false,
                error: Some(
                    "No email provider configured - OTPs are written to the server log"
                        .to_string(),
                ),
                provider: EmailProvider::Disabled,
            };
        };

        let provider = mailer.provider();
        match mailer.verify().await {
            Ok(()) => ConfigCheck {
                success: true,
                error: None,
                provider,
            },
            Err(e) => {
                tracing::error!("❌ Email configuration check failed ({}): {}", provider, e);
                ConfigCheck {
                    success: false,
                    error: Some(e.to_string()),
                    provider,
                }
            }
        }
    }
}

fn log_console_otp(to: &str, otp: &OtpCode, name: &str) {
    tracing::warn!(
        "⚠️  No email provider configured - OTP for {} <{}>: {}",
        name,
        to,
        otp
    );
    tracing::warn!(
        "⚠️  Set RESEND_API_KEY, or SMTP_HOST/SMTP_USER/SMTP_PASSWORD, or SMTP_USER/SMTP_PASSWORD for Gmail"
    );
}
