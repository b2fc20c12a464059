use crate::config::{optional, parse_or, required, ConfigError};

#[derive(Clone)]
pub struct HttpGatewayConfig {
    pub endpoint: String,
    pub api_key: String,
    pub sender_id: Option<String>,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for HttpGatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGatewayConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[redacted]")
            .field("sender_id", &self.sender_id)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub enum SmsGatewayConfig {
    Simulated,
    Http(HttpGatewayConfig),
}

impl SmsGatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        match optional("SMS_GATEWAY_MODE").as_deref() {
            None | Some("simulated") => Ok(Self::Simulated),
            Some("http") => Ok(Self::Http(HttpGatewayConfig {
                endpoint: required("SMS_GATEWAY_URL")?,
                api_key: required("SMS_GATEWAY_API_KEY")?,
                sender_id: optional("SMS_SENDER_ID"),
                timeout_secs: parse_or("SMS_GATEWAY_TIMEOUT_SECS", 10)?,
            })),
            Some(other) => Err(ConfigError::Invalid {
                key: "SMS_GATEWAY_MODE",
                reason: format!("expected 'simulated' or 'http', got '{}'", other),
            }),
        }
    }
}
