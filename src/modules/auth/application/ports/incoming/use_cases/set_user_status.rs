use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{UserId, UserView};

#[derive(Debug, Clone)]
pub struct SetUserStatusCommand {
    pub actor: UserId,
    pub target: UserId,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetUserStatusError {
    #[error("Administrators cannot deactivate themselves")]
    CannotDeactivateSelf,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SetUserStatusUseCase: Send + Sync {
    async fn execute(&self, command: SetUserStatusCommand)
        -> Result<UserView, SetUserStatusError>;
}
