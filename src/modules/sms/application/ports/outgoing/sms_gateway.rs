use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SmsGatewayError {
    #[error("Gateway rejected message: {0}")]
    Rejected(String),

    #[error("Gateway transport error: {0}")]
    Transport(String),
}

/// Delivers a single text message. Returns the provider's message id when
/// it reports one.
#[async_trait]
pub trait SmsGateway: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<Option<String>, SmsGatewayError>;
}
