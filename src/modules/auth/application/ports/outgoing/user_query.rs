use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{User, UserId};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;

    /// Look a user up by username or by (lower-cased) e-mail.
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, UserQueryError>;

    /// Users ordered by creation time, newest first.
    async fn list(&self, page: PageRequest) -> Result<PageResult<User>, UserQueryError>;
}
