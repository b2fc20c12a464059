use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{OtpCode, UserId};
use crate::modules::auth::application::ports::outgoing::{
    NewOtp, OtpRepository, OtpRepositoryError,
};

use super::sea_orm_entity::otp_codes::{
    ActiveModel as OtpActiveModel, Column as OtpColumn, Entity as OtpEntity,
};

#[derive(Clone, Debug)]
pub struct OtpRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OtpRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> OtpRepositoryError {
    OtpRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl OtpRepository for OtpRepositoryPostgres {
    async fn replace_for_user(&self, otp: NewOtp) -> Result<OtpCode, OtpRepositoryError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        let removed = OtpEntity::delete_many()
            .filter(OtpColumn::UserId.eq(otp.user_id.value()))
            .filter(OtpColumn::IsUsed.eq(false))
            .exec(&txn)
            .await
            .map_err(db_error)?;

        let inserted = OtpActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(otp.user_id.value()),
            email: Set(otp.email),
            code: Set(otp.code),
            is_used: Set(false),
            expires_at: Set(otp.expires_at.into()),
            created_at: Set(Utc::now().into()),
        }
        .insert(&txn)
        .await
        .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;

        debug!(
            user_id = %otp.user_id,
            replaced = removed.rows_affected,
            "Stored new OTP"
        );
        Ok(inserted.into())
    }

    async fn find_latest_matching(
        &self,
        user_id: UserId,
        email: &str,
        code: &str,
    ) -> Result<Option<OtpCode>, OtpRepositoryError> {
        let found = OtpEntity::find()
            .filter(OtpColumn::UserId.eq(user_id.value()))
            .filter(OtpColumn::Email.eq(email))
            .filter(OtpColumn::Code.eq(code))
            .order_by_desc(OtpColumn::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(found.map(OtpCode::from))
    }

    async fn mark_used(&self, otp_id: Uuid) -> Result<bool, OtpRepositoryError> {
        let result = OtpEntity::update_many()
            .col_expr(OtpColumn::IsUsed, Expr::value(true))
            .filter(OtpColumn::Id.eq(otp_id))
            .filter(OtpColumn::IsUsed.eq(false))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected == 1)
    }
}
