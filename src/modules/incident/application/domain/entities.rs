use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

pub const MAX_DISEASE_LEN: usize = 100;
pub const MAX_DETAILS_LEN: usize = 2000;

/// A suspected disease case reported at a point on the map.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: Uuid,
    #[schema(example = "Cholera")]
    pub disease: String,
    #[schema(example = 26.1)]
    pub latitude: f64,
    #[schema(example = 91.7)]
    pub longitude: f64,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub fn is_valid_latitude(value: f64) -> bool {
    value.is_finite() && (-90.0..=90.0).contains(&value)
}

pub fn is_valid_longitude(value: f64) -> bool {
    value.is_finite() && (-180.0..=180.0).contains(&value)
}
