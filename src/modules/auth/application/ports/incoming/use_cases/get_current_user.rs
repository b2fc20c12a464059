use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{UserId, UserView};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetCurrentUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Account is inactive")]
    AccountInactive,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetCurrentUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UserView, GetCurrentUserError>;
}
