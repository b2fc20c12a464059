use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::sms::application::domain::entities::{SmsAlert, SmsResponse};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListSmsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListAlertsUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<SmsAlert>, ListSmsError>;
}

#[async_trait]
pub trait ListResponsesUseCase: Send + Sync {
    async fn execute(
        &self,
        alert_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<PageResult<SmsResponse>, ListSmsError>;
}
