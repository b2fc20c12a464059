use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::sms::application::domain::classifier::classify;
use crate::modules::sms::application::domain::entities::SmsResponse;
use crate::modules::sms::application::ports::incoming::use_cases::{
    ReceiveReplyCommand, ReceiveReplyError, ReceiveReplyUseCase,
};
use crate::modules::sms::application::ports::outgoing::{
    NewSmsResponse, SmsRepository, SmsRepositoryError,
};

pub struct ReceiveReplyService<R>
where
    R: SmsRepository,
{
    repository: R,
}

impl<R> ReceiveReplyService<R>
where
    R: SmsRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReceiveReplyUseCase for ReceiveReplyService<R>
where
    R: SmsRepository + Send + Sync,
{
    async fn execute(&self, command: ReceiveReplyCommand) -> Result<SmsResponse, ReceiveReplyError> {
        let classification = classify(command.message());

        let response = self
            .repository
            .create_response(NewSmsResponse {
                phone: command.phone().to_string(),
                message_text: command.message().to_string(),
                alert_id: command.alert_id(),
                cases_reported: classification.cases_reported,
                response_type: classification.response_type,
                urgency_level: classification.urgency_level,
                is_emergency: classification.is_emergency,
            })
            .await
            .map_err(|e| match (e, command.alert_id()) {
                (SmsRepositoryError::UnknownAlert, Some(id)) => ReceiveReplyError::UnknownAlert(id),
                (e, _) => ReceiveReplyError::RepositoryError(e.to_string()),
            })?;

        if response.is_emergency {
            warn!(
                response_id = %response.id,
                phone = %response.phone,
                "Emergency SMS reply received"
            );
        } else {
            info!(
                response_id = %response.id,
                response_type = %response.response_type,
                cases = response.cases_reported,
                "SMS reply recorded"
            );
        }

        Ok(response)
    }
}
