use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct LogoutCommand {
    pub token: String,
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LogoutError {
    #[error("Token revocation failed: {0}")]
    RevocationFailed(String),
}

#[async_trait]
pub trait LogoutUserUseCase: Send + Sync {
    async fn execute(&self, command: LogoutCommand) -> Result<(), LogoutError>;
}
