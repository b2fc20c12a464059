use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::UserView;
use crate::modules::auth::application::ports::incoming::use_cases::{
    SetUserStatusCommand, SetUserStatusError, SetUserStatusUseCase,
};
use crate::modules::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

pub struct SetUserStatusService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> SetUserStatusService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SetUserStatusUseCase for SetUserStatusService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SetUserStatusCommand,
    ) -> Result<UserView, SetUserStatusError> {
        if command.actor == command.target && !command.is_active {
            return Err(SetUserStatusError::CannotDeactivateSelf);
        }

        let user = self
            .repository
            .set_active(command.target, command.is_active)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => SetUserStatusError::UserNotFound,
                other => SetUserStatusError::RepositoryError(other.to_string()),
            })?;

        info!(
            actor = %command.actor,
            target = %command.target,
            is_active = command.is_active,
            "User status changed"
        );
        Ok(user.to_view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{Role, UserId};
    use crate::tests::support::auth_fakes::{sample_user, InMemoryUserStore};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_deactivates_other_user() {
        let admin = sample_user("root_admin", Role::Admin);
        let worker = sample_user("asha_meena", Role::AshaWorker);
        let store = InMemoryUserStore::with_users(vec![admin.clone(), worker.clone()]);
        let service = SetUserStatusService::new(store.clone());

        let view = service
            .execute(SetUserStatusCommand {
                actor: admin.user_id(),
                target: worker.user_id(),
                is_active: false,
            })
            .await
            .unwrap();

        assert!(!view.is_active);
    }

    #[tokio::test]
    async fn test_admin_cannot_deactivate_self() {
        let admin = sample_user("root_admin", Role::Admin);
        let service = SetUserStatusService::new(InMemoryUserStore::with_users(vec![admin.clone()]));

        let result = service
            .execute(SetUserStatusCommand {
                actor: admin.user_id(),
                target: admin.user_id(),
                is_active: false,
            })
            .await;

        assert_eq!(result.unwrap_err(), SetUserStatusError::CannotDeactivateSelf);
    }

    #[tokio::test]
    async fn test_unknown_target() {
        let service = SetUserStatusService::new(InMemoryUserStore::default());

        let result = service
            .execute(SetUserStatusCommand {
                actor: UserId::from(Uuid::new_v4()),
                target: UserId::from(Uuid::new_v4()),
                is_active: true,
            })
            .await;

        assert_eq!(result.unwrap_err(), SetUserStatusError::UserNotFound);
    }
}
