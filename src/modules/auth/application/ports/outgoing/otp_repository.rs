use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{OtpCode, UserId};

#[derive(Debug, Clone)]
pub struct NewOtp {
    pub user_id: UserId,
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OtpRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Delete the user's unused codes and store `otp`, atomically.
    async fn replace_for_user(&self, otp: NewOtp) -> Result<OtpCode, OtpRepositoryError>;

    /// Most recent record for the triple, whether used or expired.
    async fn find_latest_matching(
        &self,
        user_id: UserId,
        email: &str,
        code: &str,
    ) -> Result<Option<OtpCode>, OtpRepositoryError>;

    /// Flip `is_used` on an unused code. Returns `false` if it was already used.
    async fn mark_used(&self, otp_id: Uuid) -> Result<bool, OtpRepositoryError>;
}
