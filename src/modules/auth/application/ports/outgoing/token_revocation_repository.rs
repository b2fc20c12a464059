use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenRevocationError {
    #[error("Token already expired")]
    AlreadyExpired,

    #[error("Revocation store error: {0}")]
    StoreError(String),
}

/// Revoked session tokens, keyed by their SHA-256 hash.
#[async_trait]
pub trait TokenRevocationRepository: Send + Sync {
    async fn revoke(
        &self,
        token_hash: &str,
        user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRevocationError>;

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, TokenRevocationError>;
}
