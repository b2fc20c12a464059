use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{UserId, UserView, OTP_LENGTH};
use crate::shared::validation::ValidationIssue;

#[derive(Debug, Clone)]
pub struct VerifyOtpCommand {
    user_id: UserId,
    email: String,
    code: String,
}

impl VerifyOtpCommand {
    pub fn new(user_id: Uuid, email: String, code: String) -> Result<Self, Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let email = email.trim().to_lowercase();
        if email.is_empty() {
            issues.push(ValidationIssue::new("email", "Email is required"));
        }

        let code = code.trim().to_string();
        if code.len() != OTP_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            issues.push(ValidationIssue::new(
                "code",
                format!("Code must be {} digits", OTP_LENGTH),
            ));
        }

        if issues.is_empty() {
            Ok(Self {
                user_id: UserId::from(user_id),
                email,
                code,
            })
        } else {
            Err(issues)
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedSession {
    pub user: UserView,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerifyOtpError {
    #[error("Invalid or expired code")]
    InvalidOtp,

    #[error("Account is inactive")]
    AccountInactive,

    #[error("Token issue failed: {0}")]
    TokenIssueFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait VerifyOtpUseCase: Send + Sync {
    async fn execute(&self, command: VerifyOtpCommand) -> Result<VerifiedSession, VerifyOtpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_six_digits() {
        let cmd =
            VerifyOtpCommand::new(Uuid::new_v4(), " A@B.org ".into(), "012345".into()).unwrap();
        assert_eq!(cmd.email(), "a@b.org");
        assert_eq!(cmd.code(), "012345");
    }

    #[test]
    fn rejects_short_or_non_numeric_codes() {
        assert!(VerifyOtpCommand::new(Uuid::new_v4(), "a@b.org".into(), "12345".into()).is_err());
        assert!(VerifyOtpCommand::new(Uuid::new_v4(), "a@b.org".into(), "12a456".into()).is_err());
    }
}
