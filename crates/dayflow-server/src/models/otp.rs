//! OTP and email DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use dayflow::EmailProvider;

use crate::application::{ConfigCheck, SendOutcome};

/// Issue OTP request
#[derive(Debug, Deserialize, ToSchema)]
pub struct IssueOtpRequest {
    pub email: String,
    pub name: String,
}

/// Verify OTP request
#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyOtpResponse {
    pub verified: bool,
}

/// Delivery result
#[derive(Debug, Serialize, ToSchema)]
pub struct SendOutcomeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<SendOutcome> for SendOutcomeResponse {
    fn from(o: SendOutcome) -> Self {
        Self {
            success: o.success,
            error: o.error,
        }
    }
}

/// Email transport self-test result
#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigCheckResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// resend, smtp, gmail or none
    #[schema(value_type = String, example = "resend")]
    pub provider: EmailProvider,
}

impl From<ConfigCheck> for ConfigCheckResponse {
    fn from(c: ConfigCheck) -> Self {
        Self {
            success: c.success,
            error: c.error,
            provider: c.provider,
        }
    }
}
