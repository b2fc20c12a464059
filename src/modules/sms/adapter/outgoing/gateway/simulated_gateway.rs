use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::sms::application::ports::outgoing::{SmsGateway, SmsGatewayError};

/// Logs instead of sending. Used when no SMS provider is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSmsGateway;

#[async_trait]
impl SmsGateway for SimulatedSmsGateway {
    async fn send(&self, to: &str, body: &str) -> Result<Option<String>, SmsGatewayError> {
        let message_id = format!("sim-{}", Uuid::new_v4());
        info!(
            to = %to,
            chars = body.chars().count(),
            message_id = %message_id,
            "Simulated SMS send"
        );
        Ok(Some(message_id))
    }
}
