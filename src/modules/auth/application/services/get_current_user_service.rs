use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{UserId, UserView};
use crate::modules::auth::application::ports::incoming::use_cases::{
    GetCurrentUserError, GetCurrentUserUseCase,
};
use crate::modules::auth::application::ports::outgoing::UserQuery;

pub struct GetCurrentUserService<Q>
where
    Q: UserQuery,
{
    users: Q,
}

impl<Q> GetCurrentUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(users: Q) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<Q> GetCurrentUserUseCase for GetCurrentUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserView, GetCurrentUserError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| GetCurrentUserError::QueryError(e.to_string()))?
            .ok_or(GetCurrentUserError::UserNotFound)?;

        if !user.is_active {
            return Err(GetCurrentUserError::AccountInactive);
        }

        Ok(user.to_view())
    }
}
