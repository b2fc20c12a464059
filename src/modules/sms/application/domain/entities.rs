use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const MAX_RECIPIENTS: usize = 500;
pub const MAX_DISEASE_TYPE_LEN: usize = 100;
pub const MAX_LOCATION_LEN: usize = 255;
pub const MAX_REPLY_LEN: usize = 1600;

const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Implements `as_str`, `Display` and case-insensitive `FromStr` for the
/// SCREAMING_SNAKE_CASE enums stored as text columns.
macro_rules! text_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == normalized)
                    .ok_or_else(|| UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

text_enum!(Severity, "severity", {
    Mild => "MILD",
    Moderate => "MODERATE",
    Severe => "SEVERE",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatus {
    Sent,
    Failed,
}

text_enum!(AlertStatus, "alert status", {
    Sent => "SENT",
    Failed => "FAILED",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseType {
    NoCases,
    CasesReported,
    Emergency,
    Unclear,
}

text_enum!(ResponseType, "response type", {
    NoCases => "NO_CASES",
    CasesReported => "CASES_REPORTED",
    Emergency => "EMERGENCY",
    Unclear => "UNCLEAR",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

text_enum!(UrgencyLevel, "urgency level", {
    Low => "LOW",
    Medium => "MEDIUM",
    High => "HIGH",
    Critical => "CRITICAL",
});

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SmsAlert {
    pub id: Uuid,
    #[schema(example = "Cholera")]
    pub disease_type: String,
    pub severity: Severity,
    pub affected_count: i32,
    #[schema(example = "Majuli ward 4")]
    pub location: String,
    pub action_required: String,
    pub message_content: String,
    pub recipients: Vec<String>,
    pub sent_count: i32,
    pub failed_count: i32,
    pub status: AlertStatus,
    pub sent_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SmsResponse {
    pub id: Uuid,
    #[schema(example = "+919812345678")]
    pub phone: String,
    #[schema(example = "3 cases of diarrhea")]
    pub message_text: String,
    pub alert_id: Option<Uuid>,
    pub cases_reported: i32,
    pub response_type: ResponseType,
    pub urgency_level: UrgencyLevel,
    pub is_emergency: bool,
    pub received_at: DateTime<Utc>,
}

/// Strips spaces and dashes and checks for an optional `+` followed by
/// 10 to 15 digits. Returns the compact form.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let compact: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);

    let valid = (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit());

    valid.then_some(compact)
}

pub fn render_alert_message(
    severity: Severity,
    disease_type: &str,
    location: &str,
    affected_count: i32,
    action_required: &str,
) -> String {
    format!(
        "ALERT [{}]: {} outbreak in {}. {} cases reported. Action: {}. Reply with number of cases in your area or NO CASES. - River Pulse",
        severity, disease_type, location, affected_count, action_required
    )
}
