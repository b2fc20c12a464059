use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::sms::application::domain::entities::{SmsAlert, SmsResponse};
use crate::modules::sms::application::ports::incoming::use_cases::{
    ListAlertsUseCase, ListResponsesUseCase, ListSmsError,
};
use crate::modules::sms::application::ports::outgoing::SmsQuery;
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListAlertsService<Q>
where
    Q: SmsQuery,
{
    query: Q,
}

impl<Q> ListAlertsService<Q>
where
    Q: SmsQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListAlertsUseCase for ListAlertsService<Q>
where
    Q: SmsQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<PageResult<SmsAlert>, ListSmsError> {
        self.query
            .list_alerts(page)
            .await
            .map_err(|e| ListSmsError::QueryError(e.to_string()))
    }
}

pub struct ListResponsesService<Q>
where
    Q: SmsQuery,
{
    query: Q,
}

impl<Q> ListResponsesService<Q>
where
    Q: SmsQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListResponsesUseCase for ListResponsesService<Q>
where
    Q: SmsQuery + Send + Sync,
{
    async fn execute(
        &self,
        alert_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<PageResult<SmsResponse>, ListSmsError> {
        self.query
            .list_responses(alert_id, page)
            .await
            .map_err(|e| ListSmsError::QueryError(e.to_string()))
    }
}
