use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserView;
use crate::modules::auth::application::ports::incoming::use_cases::{
    ListUsersError, ListUsersUseCase,
};
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListUsersService<Q>
where
    Q: UserQuery,
{
    users: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery,
{
    pub fn new(users: Q) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<PageResult<UserView>, ListUsersError> {
        self.users
            .list(page)
            .await
            .map(|result| result.map(|user| user.to_view()))
            .map_err(|e| ListUsersError::QueryError(e.to_string()))
    }
}
