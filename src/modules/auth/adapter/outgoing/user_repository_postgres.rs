use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{User, UserId};
use crate::modules::auth::application::ports::outgoing::{
    CreateUserData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn is_unique_violation(e: &DbErr) -> bool {
    let err_str = e.to_string().to_lowercase();
    err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
}

fn db_error(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let now = Utc::now();
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            full_name: Set(data.full_name),
            role: Set(data.role.as_str().to_string()),
            assigned_area: Set(data.assigned_area),
            is_active: Set(true),
            last_login_at: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                UserRepositoryError::UserAlreadyExists
            } else {
                db_error(e)
            }
        })?;

        inserted
            .into_domain()
            .map_err(UserRepositoryError::DatabaseError)
    }

    async fn record_login(
        &self,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(
                UserColumn::LastLoginAt,
                Expr::value(Some(at.fixed_offset())),
            )
            .filter(UserColumn::Id.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }

    async fn set_active(
        &self,
        user_id: UserId,
        is_active: bool,
    ) -> Result<User, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.is_active = Set(is_active);
        active_user.updated_at = Set(Utc::now().into());

        let updated = active_user.update(&*self.db).await.map_err(db_error)?;

        updated
            .into_domain()
            .map_err(UserRepositoryError::DatabaseError)
    }
}
