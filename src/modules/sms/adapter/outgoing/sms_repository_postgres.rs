use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use serde_json::Value as Json;
use uuid::Uuid;

use crate::modules::sms::application::domain::entities::{SmsAlert, SmsResponse};
use crate::modules::sms::application::ports::outgoing::{
    NewSmsAlert, NewSmsResponse, SmsRepository, SmsRepositoryError,
};

use super::sea_orm_entity::sms_alerts::ActiveModel as AlertActiveModel;
use super::sea_orm_entity::sms_responses::ActiveModel as ResponseActiveModel;

#[derive(Debug, Clone)]
pub struct SmsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SmsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn is_foreign_key_violation(e: &DbErr) -> bool {
    let err_str = e.to_string().to_lowercase();
    err_str.contains("23503") || err_str.contains("foreign key")
}

fn db_error(e: DbErr) -> SmsRepositoryError {
    SmsRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl SmsRepository for SmsRepositoryPostgres {
    async fn create_alert(&self, alert: NewSmsAlert) -> Result<SmsAlert, SmsRepositoryError> {
        let model = AlertActiveModel {
            id: Set(Uuid::new_v4()),
            disease_type: Set(alert.disease_type),
            severity: Set(alert.severity.as_str().to_string()),
            affected_count: Set(alert.affected_count),
            location: Set(alert.location),
            action_required: Set(alert.action_required),
            message_content: Set(alert.message_content),
            recipients: Set(Json::from(alert.recipients)),
            sent_count: Set(alert.sent_count),
            failed_count: Set(alert.failed_count),
            status: Set(alert.status.as_str().to_string()),
            sent_by: Set(alert.sent_by),
            created_at: Set(Utc::now().into()),
        }
        .insert(&*self.db)
        .await
        .map_err(db_error)?;

        model.into_domain().map_err(SmsRepositoryError::DatabaseError)
    }

    async fn create_response(
        &self,
        response: NewSmsResponse,
    ) -> Result<SmsResponse, SmsRepositoryError> {
        let model = ResponseActiveModel {
            id: Set(Uuid::new_v4()),
            phone: Set(response.phone),
            message_text: Set(response.message_text),
            alert_id: Set(response.alert_id),
            cases_reported: Set(response.cases_reported),
            response_type: Set(response.response_type.as_str().to_string()),
            urgency_level: Set(response.urgency_level.as_str().to_string()),
            is_emergency: Set(response.is_emergency),
            received_at: Set(Utc::now().into()),
        }
        .insert(&*self.db)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                SmsRepositoryError::UnknownAlert
            } else {
                db_error(e)
            }
        })?;

        model.into_domain().map_err(SmsRepositoryError::DatabaseError)
    }
}
