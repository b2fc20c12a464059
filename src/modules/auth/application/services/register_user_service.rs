use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::UserView;
use crate::modules::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserError, RegisterUserUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserRepository, UserRepositoryError,
};

pub struct RegisterUserService<R>
where
    R: UserRepository,
{
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> RegisterUserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl<R> RegisterUserUseCase for RegisterUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<UserView, RegisterUserError> {
        if !command.role().is_self_assignable() {
            return Err(RegisterUserError::RoleNotAllowed(command.role()));
        }

        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(CreateUserData {
                username: command.username().to_string(),
                email: command.email().to_string(),
                password_hash,
                full_name: command.full_name().to_string(),
                role: command.role(),
                assigned_area: command.assigned_area().map(str::to_string),
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::UserAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(user.to_view())
    }
}
