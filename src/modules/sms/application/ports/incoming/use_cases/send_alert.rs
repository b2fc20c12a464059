use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::sms::application::domain::entities::{
    normalize_phone, Severity, SmsAlert, MAX_DISEASE_TYPE_LEN, MAX_LOCATION_LEN, MAX_RECIPIENTS,
};
use crate::shared::validation::ValidationIssue;

/// Validated alert broadcast. Recipients are normalized and de-duplicated
/// in their original order.
#[derive(Debug, Clone, PartialEq)]
pub struct SendAlertCommand {
    disease_type: String,
    severity: Severity,
    affected_count: i32,
    location: String,
    action_required: String,
    recipients: Vec<String>,
}

fn required_text(
    value: Option<String>,
    field: &str,
    max_len: Option<usize>,
    issues: &mut Vec<ValidationIssue>,
) -> String {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if value.is_empty() {
        issues.push(ValidationIssue::new(field, format!("{} is required", field)));
    } else if let Some(max) = max_len {
        if value.chars().count() > max {
            issues.push(ValidationIssue::new(
                field,
                format!("{} must be at most {} characters", field, max),
            ));
        }
    }
    value
}

impl SendAlertCommand {
    pub fn new(
        disease_type: Option<String>,
        severity: Option<String>,
        affected_count: Option<i64>,
        location: Option<String>,
        action_required: Option<String>,
        recipients: Option<Vec<String>>,
    ) -> Result<Self, Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let disease_type = required_text(
            disease_type,
            "diseaseType",
            Some(MAX_DISEASE_TYPE_LEN),
            &mut issues,
        );

        let severity = match severity.as_deref().map(str::trim) {
            None | Some("") => {
                issues.push(ValidationIssue::new("severity", "severity is required"));
                None
            }
            Some(raw) => match raw.parse::<Severity>() {
                Ok(s) => Some(s),
                Err(_) => {
                    issues.push(ValidationIssue::new(
                        "severity",
                        "severity must be one of MILD, MODERATE, SEVERE",
                    ));
                    None
                }
            },
        };

        let affected_count = match affected_count {
            None => {
                issues.push(ValidationIssue::new(
                    "affectedCount",
                    "affectedCount is required",
                ));
                0
            }
            Some(n) if n < 0 => {
                issues.push(ValidationIssue::new(
                    "affectedCount",
                    "affectedCount must not be negative",
                ));
                0
            }
            Some(n) => i32::try_from(n).unwrap_or_else(|_| {
                issues.push(ValidationIssue::new("affectedCount", "affectedCount is too large"));
                0
            }),
        };

        let location = required_text(location, "location", Some(MAX_LOCATION_LEN), &mut issues);
        let action_required = required_text(action_required, "actionRequired", None, &mut issues);

        let raw_recipients = recipients.unwrap_or_default();
        let mut normalized: Vec<String> = Vec::with_capacity(raw_recipients.len());
        for raw in &raw_recipients {
            match normalize_phone(raw) {
                // "+91..." and "91..." reach the same handset; first form wins
                Some(phone) => {
                    let digits = phone.trim_start_matches('+');
                    if !normalized
                        .iter()
                        .any(|p| p.trim_start_matches('+') == digits)
                    {
                        normalized.push(phone);
                    }
                }
                None => issues.push(ValidationIssue::new(
                    "recipients",
                    format!("'{}' is not a valid phone number", raw),
                )),
            }
        }
        if raw_recipients.is_empty() {
            issues.push(ValidationIssue::new(
                "recipients",
                "at least one recipient is required",
            ));
        } else if normalized.len() > MAX_RECIPIENTS {
            issues.push(ValidationIssue::new(
                "recipients",
                format!("at most {} recipients are allowed", MAX_RECIPIENTS),
            ));
        }

        match severity {
            Some(severity) if issues.is_empty() => Ok(Self {
                disease_type,
                severity,
                affected_count,
                location,
                action_required,
                recipients: normalized,
            }),
            _ => Err(issues),
        }
    }

    pub fn disease_type(&self) -> &str {
        &self.disease_type
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn affected_count(&self) -> i32 {
        self.affected_count
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn action_required(&self) -> &str {
        &self.action_required
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipientResult {
    pub phone: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertDispatch {
    pub alert: SmsAlert,
    pub results: Vec<RecipientResult>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SendAlertError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SendAlertUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SendAlertCommand,
        sent_by: Option<Uuid>,
    ) -> Result<AlertDispatch, SendAlertError>;
}
