use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::auth::application::domain::entities::{Role, User, UserId};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    pub assigned_area: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    async fn record_login(
        &self,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    async fn set_active(&self, user_id: UserId, is_active: bool)
        -> Result<User, UserRepositoryError>;
}
