use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::config::HttpGatewayConfig;
use crate::modules::sms::application::ports::outgoing::{SmsGateway, SmsGatewayError};

/// Provider error bodies are truncated to this many characters.
const MAX_ERROR_BODY: usize = 200;

#[derive(Serialize)]
struct OutboundSms<'a> {
    to: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<&'a str>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GatewayReply {
    #[serde(alias = "id", alias = "message_id", alias = "sid")]
    message_id: Option<String>,
}

/// JSON-over-HTTP SMS provider authenticated with a bearer API key.
#[derive(Clone)]
pub struct HttpSmsGateway {
    client: reqwest::Client,
    config: HttpGatewayConfig,
}

impl std::fmt::Debug for HttpSmsGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSmsGateway")
            .field("config", &self.config)
            .finish()
    }
}

impl HttpSmsGateway {
    pub fn new(config: HttpGatewayConfig) -> Result<Self, SmsGatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SmsGatewayError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl SmsGateway for HttpSmsGateway {
    async fn send(&self, to: &str, body: &str) -> Result<Option<String>, SmsGatewayError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&OutboundSms {
                to,
                message: body,
                from: self.config.sender_id.as_deref(),
            })
            .send()
            .await
            .map_err(|e| SmsGatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SmsGatewayError::Transport(e.to_string()))?;

        if !status.is_success() {
            let detail: String = text.chars().take(MAX_ERROR_BODY).collect();
            return Err(SmsGatewayError::Rejected(format!("{}: {}", status, detail)));
        }

        let reply: GatewayReply = serde_json::from_str(&text).unwrap_or_default();
        Ok(reply.message_id)
    }
}
