use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::modules::auth::application::domain::entities::{User, UserId};
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::shared::pagination::{PageRequest, PageResult};

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: UserModel) -> Result<User, UserQueryError> {
        model.into_domain().map_err(UserQueryError::DatabaseError)
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?
            .map(Self::to_domain)
            .transpose()
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, UserQueryError> {
        let filter = if identifier.contains('@') {
            UserColumn::Email.eq(identifier.to_lowercase())
        } else {
            UserColumn::Username.eq(identifier)
        };

        UserEntity::find()
            .filter(filter)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?
            .map(Self::to_domain)
            .transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<PageResult<User>, UserQueryError> {
        let total = UserEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        let models = UserEntity::find()
            .order_by_desc(UserColumn::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        let items = models
            .into_iter()
            .map(Self::to_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(items, page, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};
    use std::collections::BTreeMap;
    use uuid::Uuid;

    fn model(username: &str) -> UserModel {
        let now = Utc::now();
        UserModel {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{}@example.org", username),
            password_hash: "hash".to_string(),
            full_name: "Sample".to_string(),
            role: "CLINIC_STAFF".to_string(),
            assigned_area: None,
            is_active: true,
            last_login_at: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn count_row(n: i64) -> BTreeMap<String, Value> {
        let mut row = BTreeMap::new();
        row.insert("num_items".to_string(), Value::BigInt(Some(n)));
        row
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let row = model("clinic_one");
        let id = row.id;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();
        let query = UserQueryPostgres::new(Arc::new(db));

        let user = query.find_by_id(UserId::from(id)).await.unwrap().unwrap();

        assert_eq!(user.id, id);
    }

    #[tokio::test]
    async fn test_find_by_identifier_uses_email_column_for_addresses() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("clinic_one")]])
            .into_connection();
        let query = UserQueryPostgres::new(Arc::new(db));

        let found = query
            .find_by_identifier("Clinic_One@Example.org")
            .await
            .unwrap();
        assert!(found.is_some());

        let UserQueryPostgres { db } = query;
        let log = Arc::try_unwrap(db).unwrap().into_transaction_log();
        let sql = format!("{:?}", log);
        assert!(sql.contains("email"));
        assert!(sql.contains("clinic_one@example.org"));
    }

    #[tokio::test]
    async fn test_find_by_identifier_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();
        let query = UserQueryPostgres::new(Arc::new(db));

        assert!(query.find_by_identifier("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_paginates() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row(3)]])
            .append_query_results([vec![model("a_one"), model("b_two")]])
            .into_connection();
        let query = UserQueryPostgres::new(Arc::new(db));

        let page = query.list(PageRequest::new(Some(1), Some(2))).await.unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 2);
    }

    #[tokio::test]
    async fn test_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("db down".to_string())])
            .into_connection();
        let query = UserQueryPostgres::new(Arc::new(db));

        let result = query.find_by_id(UserId::from(Uuid::new_v4())).await;

        assert!(matches!(result, Err(UserQueryError::DatabaseError(_))));
    }
}
