//! OTP Application Service
//!
//! Issues email verification codes, keeps them in a process-local TTL cache
//! and checks them on verify.

use chrono::{DateTime, TimeDelta, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

use dayflow::{DomainError, OtpCode, TtlCache, OTP_VALIDITY_MINUTES};

use super::notification_service::{NotificationService, SendOutcome};

/// Wrong guesses a code survives; the next one discards it
pub const MAX_VERIFY_ATTEMPTS: u8 = 5;

/// Outstanding code and the wrong guesses made against it
#[derive(Debug, Clone)]
struct PendingOtp {
    code: OtpCode,
    failed_attempts: u8,
}

/// Application service for OTP issue and verification
pub struct OtpService {
    notifications: Arc<NotificationService>,
    store: Mutex<TtlCache<String, PendingOtp>>,
    ttl: TimeDelta,
}

impl OtpService {
    pub fn new(notifications: Arc<NotificationService>) -> Self {
        Self {
            notifications,
            store: Mutex::new(TtlCache::new()),
            ttl: TimeDelta::minutes(OTP_VALIDITY_MINUTES),
        }
    }

    /// Generate and send a fresh code, replacing any outstanding one.
    ///
    /// The code is stored before delivery and stays stored when delivery
    /// fails; the outcome tells the caller what happened.
    pub async fn issue(
        &self,
        email: &str,
        name: &str,
        now: DateTime<Utc>,
    ) -> Result<SendOutcome, DomainError> {
        let key = normalize_email(email)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("Name is required".to_string()));
        }

        let otp = OtpCode::generate();
        {
            let mut store = self.store.lock().await;
            store.purge_expired(now);
            let pending = PendingOtp {
                code: otp.clone(),
                failed_attempts: 0,
            };
            store.insert(key, pending, self.ttl, now);
        }

        Ok(self.notifications.send_otp(email.trim(), &otp, name).await)
    }

    /// True when `code` matches the live code for `email`; a match consumes it.
    /// After `MAX_VERIFY_ATTEMPTS` wrong guesses the code is discarded.
    pub async fn verify(&self, email: &str, code: &str, now: DateTime<Utc>) -> bool {
        let Ok(key) = normalize_email(email) else {
            return false;
        };

        let mut store = self.store.lock().await;
        let Some(pending) = store.get_mut(key.as_str(), now) else {
            tracing::debug!("No live OTP for {}", key);
            return false;
        };

        if pending.code.matches(code) {
            store.remove(key.as_str());
            tracing::info!("✅ OTP verified for {}", key);
            return true;
        }

        pending.failed_attempts += 1;
        if pending.failed_attempts >= MAX_VERIFY_ATTEMPTS {
            store.remove(key.as_str());
            tracing::warn!("⚠️  Too many wrong OTP attempts for {} - code discarded", key);
        } else {
            tracing::debug!("OTP mismatch for {}", key);
        }
        false
    }
}

fn normalize_email(email: &str) -> Result<String, DomainError> {
    let email = email.trim();
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid {
        return Err(DomainError::Validation(format!(
            "Invalid email address: {email:?}"
        )));
    }
    Ok(email.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::FakeMailer;
    use chrono::TimeZone;
    use dayflow::EmailProvider;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap()
    }

    fn service() -> (OtpService, FakeMailer) {
        let mailer = FakeMailer::new(EmailProvider::Resend);
        let notifications = NotificationService::new(Some(Arc::new(mailer.clone())));
        (OtpService::new(Arc::new(notifications)), mailer)
    }

    /// Pull the code back out of the plain-text body
    fn sent_code(mailer: &FakeMailer) -> String {
        let sent = mailer.sent();
        let text = &sent.last().unwrap().text;
        text.split(|c: char| !c.is_ascii_digit())
            .find(|word| word.len() == 6)
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_issue_then_verify_consumes_code() {
        let (service, mailer) = service();

        let outcome = service.issue("Asha@Example.com", "Asha", now()).await.unwrap();
        assert!(outcome.success);
        let code = sent_code(&mailer);

        assert!(!service.verify("asha@example.com", "000000x", now()).await);
        assert!(service.verify("asha@example.com", &code, now()).await);
        // Consumed
        assert!(!service.verify("asha@example.com", &code, now()).await);
    }

    #[tokio::test]
    async fn test_code_is_discarded_after_too_many_wrong_guesses() {
        let (service, mailer) = service();
        service.issue("asha@example.com", "Asha", now()).await.unwrap();
        let code = sent_code(&mailer);
        let wrong = if code == "000000" { "111111" } else { "000000" };

        for _ in 0..MAX_VERIFY_ATTEMPTS {
            assert!(!service.verify("asha@example.com", wrong, now()).await);
        }

        assert!(!service.verify("asha@example.com", &code, now()).await);
        assert!(service.store.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_correct_code_within_attempt_budget() {
        let (service, mailer) = service();
        service.issue("asha@example.com", "Asha", now()).await.unwrap();
        let code = sent_code(&mailer);
        let wrong = if code == "000000" { "111111" } else { "000000" };

        for _ in 1..MAX_VERIFY_ATTEMPTS {
            assert!(!service.verify("asha@example.com", wrong, now()).await);
        }

        assert!(service.verify("asha@example.com", &code, now()).await);
    }

    #[tokio::test]
    async fn test_reissue_resets_attempts() {
        let (service, mailer) = service();
        service.issue("asha@example.com", "Asha", now()).await.unwrap();
        let first = sent_code(&mailer);
        let wrong = if first == "000000" { "111111" } else { "000000" };
        for _ in 1..MAX_VERIFY_ATTEMPTS {
            service.verify("asha@example.com", wrong, now()).await;
        }

        service.issue("asha@example.com", "Asha", now()).await.unwrap();
        let second = sent_code(&mailer);
        let wrong = if second == "000000" { "111111" } else { "000000" };

        assert!(!service.verify("asha@example.com", wrong, now()).await);
        assert!(service.verify("asha@example.com", &second, now()).await);
    }

    #[tokio::test]
    async fn test_code_expires_after_ttl() {
        let (service, mailer) = service();
        service.issue("asha@example.com", "Asha", now()).await.unwrap();
        let code = sent_code(&mailer);

        let later = now() + TimeDelta::minutes(OTP_VALIDITY_MINUTES);
        assert!(!service.verify("asha@example.com", &code, later).await);
    }

    #[tokio::test]
    async fn test_reissue_replaces_previous_code() {
        let (service, mailer) = service();
        service.issue("asha@example.com", "Asha", now()).await.unwrap();
        let first = sent_code(&mailer);
        service.issue("asha@example.com", "Asha", now()).await.unwrap();
        let second = sent_code(&mailer);

        if first != second {
            assert!(!service.verify("asha@example.com", &first, now()).await);
        }
        assert!(service.verify("asha@example.com", &second, now()).await);
    }

    #[tokio::test]
    async fn test_code_is_kept_when_delivery_fails() {
        let notifications = NotificationService::new(Some(Arc::new(FakeMailer::failing(
            EmailProvider::Smtp,
            "timeout",
        ))));
        let service = OtpService::new(Arc::new(notifications));

        let outcome = service.issue("asha@example.com", "Asha", now()).await.unwrap();

        assert!(!outcome.success);
        assert_eq!(service.store.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_issue_rejects_bad_input() {
        let (service, mailer) = service();

        assert!(matches!(
            service.issue("not-an-email", "Asha", now()).await,
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            service.issue("asha@example.com", "  ", now()).await,
            Err(DomainError::Validation(_))
        ));
        assert!(mailer.sent().is_empty());
    }
}
