use async_trait::async_trait;
use futures::future::join_all;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::sms::application::domain::entities::{render_alert_message, AlertStatus};
use crate::modules::sms::application::ports::incoming::use_cases::{
    AlertDispatch, RecipientResult, SendAlertCommand, SendAlertError, SendAlertUseCase,
};
use crate::modules::sms::application::ports::outgoing::{NewSmsAlert, SmsGateway, SmsRepository};

pub struct SendAlertService<G, R>
where
    G: SmsGateway,
    R: SmsRepository,
{
    gateway: G,
    repository: R,
}

impl<G, R> SendAlertService<G, R>
where
    G: SmsGateway,
    R: SmsRepository,
{
    pub fn new(gateway: G, repository: R) -> Self {
        Self {
            gateway,
            repository,
        }
    }

    async fn deliver(&self, phone: &str, message: &str) -> RecipientResult {
        match self.gateway.send(phone, message).await {
            Ok(message_id) => RecipientResult {
                phone: phone.to_string(),
                success: true,
                message_id,
                error: None,
            },
            Err(e) => {
                warn!(phone = %phone, error = %e, "SMS delivery failed");
                RecipientResult {
                    phone: phone.to_string(),
                    success: false,
                    message_id: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

#[async_trait]
impl<G, R> SendAlertUseCase for SendAlertService<G, R>
where
    G: SmsGateway + Send + Sync,
    R: SmsRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SendAlertCommand,
        sent_by: Option<Uuid>,
    ) -> Result<AlertDispatch, SendAlertError> {
        let message = render_alert_message(
            command.severity(),
            command.disease_type(),
            command.location(),
            command.affected_count(),
            command.action_required(),
        );

        let results = join_all(
            command
                .recipients()
                .iter()
                .map(|phone| self.deliver(phone, &message)),
        )
        .await;

        let sent_count = results.iter().filter(|r| r.success).count() as i32;
        let failed_count = results.len() as i32 - sent_count;
        let status = if sent_count > 0 {
            AlertStatus::Sent
        } else {
            AlertStatus::Failed
        };

        let alert = self
            .repository
            .create_alert(NewSmsAlert {
                disease_type: command.disease_type().to_string(),
                severity: command.severity(),
                affected_count: command.affected_count(),
                location: command.location().to_string(),
                action_required: command.action_required().to_string(),
                message_content: message,
                recipients: command.recipients().to_vec(),
                sent_count,
                failed_count,
                status,
                sent_by,
            })
            .await
            .map_err(|e| SendAlertError::RepositoryError(e.to_string()))?;

        info!(
            alert_id = %alert.id,
            sent = sent_count,
            failed = failed_count,
            status = %status,
            "SMS alert dispatched"
        );

        Ok(AlertDispatch { alert, results })
    }
}
