use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::sms::application::domain::entities::{
    normalize_phone, SmsResponse, MAX_REPLY_LEN,
};
use crate::shared::validation::ValidationIssue;

/// Inbound reply delivered by the gateway webhook.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiveReplyCommand {
    phone: String,
    message: String,
    alert_id: Option<Uuid>,
}

impl ReceiveReplyCommand {
    pub fn new(
        phone: Option<String>,
        message: Option<String>,
        alert_id: Option<Uuid>,
    ) -> Result<Self, Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let phone = match phone.as_deref().map(str::trim) {
            None | Some("") => {
                issues.push(ValidationIssue::new("phone", "phone is required"));
                None
            }
            Some(raw) => {
                let normalized = normalize_phone(raw);
                if normalized.is_none() {
                    issues.push(ValidationIssue::new("phone", "phone is not a valid number"));
                }
                normalized
            }
        };

        let message = message.map(|m| m.trim().to_string()).unwrap_or_default();
        if message.is_empty() {
            issues.push(ValidationIssue::new("message", "message is required"));
        } else if message.chars().count() > MAX_REPLY_LEN {
            issues.push(ValidationIssue::new(
                "message",
                format!("message must be at most {} characters", MAX_REPLY_LEN),
            ));
        }

        match phone {
            Some(phone) if issues.is_empty() => Ok(Self {
                phone,
                message,
                alert_id,
            }),
            _ => Err(issues),
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn alert_id(&self) -> Option<Uuid> {
        self.alert_id
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReceiveReplyError {
    #[error("Alert {0} does not exist")]
    UnknownAlert(Uuid),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ReceiveReplyUseCase: Send + Sync {
    async fn execute(&self, command: ReceiveReplyCommand) -> Result<SmsResponse, ReceiveReplyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_phone_and_trims_message() {
        let cmd = ReceiveReplyCommand::new(
            Some("+91 98123-45678".to_string()),
            Some("  no cases \n".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(cmd.phone(), "+919812345678");
        assert_eq!(cmd.message(), "no cases");
    }

    #[test]
    fn reports_missing_and_invalid_fields() {
        let issues = ReceiveReplyCommand::new(Some("abc".to_string()), None, None).unwrap_err();
        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();

        assert_eq!(fields, vec!["phone", "message"]);
    }

    #[test]
    fn rejects_overlong_message() {
        let issues = ReceiveReplyCommand::new(
            Some("9876543210".to_string()),
            Some("x".repeat(MAX_REPLY_LEN + 1)),
            None,
        )
        .unwrap_err();

        assert_eq!(issues[0].field, "message");
    }
}
