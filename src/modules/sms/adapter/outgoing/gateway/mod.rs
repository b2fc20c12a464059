mod config;
mod http_gateway;
mod simulated_gateway;

pub use config::{HttpGatewayConfig, SmsGatewayConfig};
pub use http_gateway::HttpSmsGateway;
pub use simulated_gateway::SimulatedSmsGateway;

use async_trait::async_trait;

use crate::modules::sms::application::ports::outgoing::{SmsGateway, SmsGatewayError};

/// Gateway chosen at startup from `SMS_GATEWAY_MODE`.
#[derive(Debug, Clone)]
pub enum ConfiguredSmsGateway {
    Simulated(SimulatedSmsGateway),
    Http(HttpSmsGateway),
}

impl ConfiguredSmsGateway {
    pub fn from_config(config: SmsGatewayConfig) -> Result<Self, SmsGatewayError> {
        match config {
            SmsGatewayConfig::Simulated => Ok(Self::Simulated(SimulatedSmsGateway)),
            SmsGatewayConfig::Http(http) => HttpSmsGateway::new(http).map(Self::Http),
        }
    }
}

#[async_trait]
impl SmsGateway for ConfiguredSmsGateway {
    async fn send(&self, to: &str, body: &str) -> Result<Option<String>, SmsGatewayError> {
        match self {
            Self::Simulated(g) => g.send(to, body).await,
            Self::Http(g) => g.send(to, body).await,
        }
    }
}
