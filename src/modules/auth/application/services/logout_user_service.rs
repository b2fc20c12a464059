use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::modules::auth::application::ports::incoming::use_cases::{
    LogoutCommand, LogoutError, LogoutUserUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    TokenRevocationError, TokenRevocationRepository,
};
use crate::modules::auth::application::services::token_hasher::hash_token;

pub struct LogoutUserService {
    revocations: Arc<dyn TokenRevocationRepository + Send + Sync>,
}

impl LogoutUserService {
    pub fn new(revocations: Arc<dyn TokenRevocationRepository + Send + Sync>) -> Self {
        Self { revocations }
    }
}

#[async_trait]
impl LogoutUserUseCase for LogoutUserService {
    async fn execute(&self, command: LogoutCommand) -> Result<(), LogoutError> {
        let token_hash = hash_token(&command.token);

        match self
            .revocations
            .revoke(&token_hash, command.user_id, command.expires_at)
            .await
        {
            Ok(()) => {
                info!(user_id = %command.user_id, "Session revoked");
                Ok(())
            }
            Err(TokenRevocationError::AlreadyExpired) => {
                debug!(user_id = %command.user_id, "Token already expired, nothing to revoke");
                Ok(())
            }
            Err(TokenRevocationError::StoreError(msg)) => Err(LogoutError::RevocationFailed(msg)),
        }
    }
}
