//! Resend Mailer
//!
//! Delivers email through the Resend HTTP API using reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use dayflow::{DeliveryReceipt, DomainError, EmailProvider, Mailer, OutgoingEmail};

use crate::config::ResendConfig;

const RESEND_API_BASE: &str = "https://api.resend.com";

/// Hosted email API implementation of Mailer
pub struct ResendMailer {
    client: Client,
    api_key: String,
    from: String,
    base_url: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

#[derive(Deserialize)]
struct ResendErrorBody {
    message: Option<String>,
}

impl ResendMailer {
    pub fn new(config: &ResendConfig) -> Result<Self, DomainError> {
        Self::with_base_url(config, RESEND_API_BASE)
    }

    pub fn with_base_url(config: &ResendConfig, base_url: &str) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("dayflow-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                DomainError::ExternalService(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            from: config.from.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    fn provider(&self) -> EmailProvider {
        EmailProvider::Resend
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DomainError> {
        let request = SendEmailRequest {
            from: &self.from,
            to: [email.to.as_str()],
            subject: &email.subject,
            html: &email.html,
            text: &email.text,
        };

        tracing::info!("📤 Sending email via Resend to: {}", email.to);

        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Resend request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ResendErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(body);
            return Err(DomainError::ExternalService(format!(
                "Resend API error ({}): {}",
                status.as_u16(),
                message
            )));
        }

        let body: SendEmailResponse = response.json().await.map_err(|e| {
            DomainError::ExternalService(format!("Invalid Resend response: {e}"))
        })?;

        Ok(DeliveryReceipt {
            message_id: body.id,
        })
    }

    /// The hosted API has no dry-run endpoint; a built client with a key is all we can check
    async fn verify(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config() -> ResendConfig {
        ResendConfig {
            api_key: "re_test".to_string(),
            from: "DayFlow HRMS <hr@example.com>".to_string(),
        }
    }

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            to: "asha@example.com".to_string(),
            subject: "Verify Your Email - DayFlow HRMS".to_string(),
            html: "<p>123456</p>".to_string(),
            text: "123456".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_posts_to_emails_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("authorization", "Bearer re_test"))
            .and(body_partial_json(serde_json::json!({
                "from": "DayFlow HRMS <hr@example.com>",
                "to": ["asha@example.com"],
                "text": "123456",
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "msg_42" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mailer = ResendMailer::with_base_url(&config(), &server.uri()).unwrap();
        let receipt = mailer.send(&email()).await.unwrap();

        assert_eq!(receipt.message_id.as_deref(), Some("msg_42"));
    }

    #[tokio::test]
    async fn test_api_error_message_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "statusCode": 403,
                "name": "validation_error",
                "message": "The domain is not verified",
            })))
            .mount(&server)
            .await;

        let mailer = ResendMailer::with_base_url(&config(), &server.uri()).unwrap();
        let err = mailer.send(&email()).await.unwrap_err();

        let DomainError::ExternalService(message) = err else {
            panic!("expected external service error");
        };
        assert!(message.contains("403"));
        assert!(message.contains("The domain is not verified"));
    }
}
