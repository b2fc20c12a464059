use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Reference entry of the disease catalog. Seeded by migration, never
/// written at request time.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Disease {
    pub id: Uuid,
    #[schema(example = "Cholera")]
    pub name: String,
    #[schema(example = "cholera")]
    pub slug: String,
    pub overview: String,
    pub symptoms: Vec<String>,
    pub causes: String,
    pub prevention: Vec<String>,
    pub treatment: String,
    pub created_at: DateTime<Utc>,
}

/// Lookups are case-insensitive and ignore surrounding whitespace.
pub fn normalize_slug(raw: &str) -> String {
    raw.trim().to_lowercase()
}
