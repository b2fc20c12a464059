use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserView;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListUsersError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<UserView>, ListUsersError>;
}
