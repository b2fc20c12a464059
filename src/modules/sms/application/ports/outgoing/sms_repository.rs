use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::sms::application::domain::entities::{
    AlertStatus, ResponseType, Severity, SmsAlert, SmsResponse, UrgencyLevel,
};

#[derive(Debug, Clone, PartialEq)]
pub struct NewSmsAlert {
    pub disease_type: String,
    pub severity: Severity,
    pub affected_count: i32,
    pub location: String,
    pub action_required: String,
    pub message_content: String,
    pub recipients: Vec<String>,
    pub sent_count: i32,
    pub failed_count: i32,
    pub status: AlertStatus,
    pub sent_by: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSmsResponse {
    pub phone: String,
    pub message_text: String,
    pub alert_id: Option<Uuid>,
    pub cases_reported: i32,
    pub response_type: ResponseType,
    pub urgency_level: UrgencyLevel,
    pub is_emergency: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SmsRepositoryError {
    #[error("Referenced alert does not exist")]
    UnknownAlert,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SmsRepository: Send + Sync {
    async fn create_alert(&self, alert: NewSmsAlert) -> Result<SmsAlert, SmsRepositoryError>;

    async fn create_response(
        &self,
        response: NewSmsResponse,
    ) -> Result<SmsResponse, SmsRepositoryError>;
}
