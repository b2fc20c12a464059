use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::ValidationIssue;

#[derive(Debug, Clone)]
pub struct GenerateOtpCommand {
    identifier: String,
    password: String,
}

impl GenerateOtpCommand {
    pub fn new(identifier: String, password: String) -> Result<Self, Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let identifier = identifier.trim().to_string();
        if identifier.is_empty() {
            issues.push(ValidationIssue::new(
                "identifier",
                "Username or email is required",
            ));
        }
        if password.is_empty() {
            issues.push(ValidationIssue::new("password", "Password is required"));
        }

        if issues.is_empty() {
            Ok(Self {
                identifier,
                password,
            })
        } else {
            Err(issues)
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// What the client needs to submit the code it received by e-mail.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OtpChallenge {
    pub user_id: Uuid,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateOtpError {
    #[error("Invalid username/email or password")]
    InvalidCredentials,

    #[error("Account is inactive")]
    AccountInactive,

    #[error("OTP delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("Password verification failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GenerateOtpUseCase: Send + Sync {
    async fn execute(&self, command: GenerateOtpCommand) -> Result<OtpChallenge, GenerateOtpError>;
}
