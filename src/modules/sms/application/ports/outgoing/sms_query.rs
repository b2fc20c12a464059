use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::sms::application::domain::entities::{SmsAlert, SmsResponse};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SmsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt row {id}: {reason}")]
    CorruptRecord { id: Uuid, reason: String },
}

#[async_trait]
pub trait SmsQuery: Send + Sync {
    /// Newest first.
    async fn list_alerts(&self, page: PageRequest) -> Result<PageResult<SmsAlert>, SmsQueryError>;

    /// Newest first, optionally narrowed to replies to one alert.
    async fn list_responses(
        &self,
        alert_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<PageResult<SmsResponse>, SmsQueryError>;
}
