use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OtpNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[derive(Debug, Clone)]
pub struct OtpNotice<'a> {
    pub to: &'a str,
    pub full_name: &'a str,
    pub code: &'a str,
    pub expires_at: DateTime<Utc>,
}

/// Delivers one-time login codes to users.
#[async_trait]
pub trait OtpNotifier: Send + Sync {
    async fn send_otp(&self, notice: OtpNotice<'_>) -> Result<(), OtpNotificationError>;
}
