use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use crate::modules::sms::application::domain::entities::{SmsAlert, SmsResponse};
use crate::modules::sms::application::ports::outgoing::{SmsQuery, SmsQueryError};
use crate::shared::pagination::{PageRequest, PageResult};

use super::sea_orm_entity::sms_alerts::{Column as AlertColumn, Entity as AlertEntity};
use super::sea_orm_entity::sms_responses::{Column as ResponseColumn, Entity as ResponseEntity};

#[derive(Debug, Clone)]
pub struct SmsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SmsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> SmsQueryError {
    SmsQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl SmsQuery for SmsQueryPostgres {
    async fn list_alerts(&self, page: PageRequest) -> Result<PageResult<SmsAlert>, SmsQueryError> {
        let total = AlertEntity::find().count(&*self.db).await.map_err(db_error)?;

        let items = AlertEntity::find()
            .order_by_desc(AlertColumn::CreatedAt)
            .order_by_desc(AlertColumn::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(|model| {
                let id = model.id;
                model
                    .into_domain()
                    .map_err(|reason| SmsQueryError::CorruptRecord { id, reason })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(items, page, total))
    }

    async fn list_responses(
        &self,
        alert_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<PageResult<SmsResponse>, SmsQueryError> {
        let mut select = ResponseEntity::find();
        if let Some(alert_id) = alert_id {
            select = select.filter(ResponseColumn::AlertId.eq(alert_id));
        }

        let total = select.clone().count(&*self.db).await.map_err(db_error)?;

        let items = select
            .order_by_desc(ResponseColumn::ReceivedAt)
            .order_by_desc(ResponseColumn::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(|model| {
                let id = model.id;
                model
                    .into_domain()
                    .map_err(|reason| SmsQueryError::CorruptRecord { id, reason })
            })
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

    use crate::modules::sms::adapter::outgoing::sea_orm_entity::sms_responses;
    use crate::modules::sms::application::domain::entities::ResponseType;

    fn count_row(n: i64) -> BTreeMap<String, Value> {
        let mut row = BTreeMap::new();
        row.insert("num_items".to_string(), Value::BigInt(Some(n)));
        row
    }

    fn response(alert_id: Option<Uuid>, response_type: &str) -> sms_responses::Model {
        sms_responses::Model {
            id: Uuid::new_v4(),
            phone: "9876543210".to_string(),
            message_text: "help".to_string(),
            alert_id,
            cases_reported: 0,
            response_type: response_type.to_string(),
            urgency_level: "CRITICAL".to_string(),
            is_emergency: true,
            received_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_list_responses_filters_by_alert() {
        let alert_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row(1)]])
            .append_query_results([vec![response(Some(alert_id), "EMERGENCY")]])
            .into_connection();
        let query = SmsQueryPostgres::new(Arc::new(db));

        let page = query
            .list_responses(Some(alert_id), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].response_type, ResponseType::Emergency);

        let SmsQueryPostgres { db } = query;
        let log = format!("{:?}", Arc::try_unwrap(db).unwrap().into_transaction_log());
        assert!(log.contains("alert_id"));
        assert!(log.contains("received_at"));
    }

    #[tokio::test]
    async fn test_corrupt_enum_value_is_reported() {
        let bad = response(None, "MAYBE");
        let bad_id = bad.id;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row(1)]])
            .append_query_results([vec![bad]])
            .into_connection();
        let query = SmsQueryPostgres::new(Arc::new(db));

        let result = query.list_responses(None, PageRequest::default()).await;

        assert!(matches!(result, Err(SmsQueryError::CorruptRecord { id, .. }) if id == bad_id));
    }

    #[tokio::test]
    async fn test_list_alerts_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("timeout".to_string())])
            .into_connection();
        let query = SmsQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.list_alerts(PageRequest::default()).await,
            Err(SmsQueryError::DatabaseError(_))
        ));
    }
}
