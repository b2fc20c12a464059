use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::validation::ValidationIssue;

pub const DEFAULT_SEARCH_LIMIT: u8 = 5;
pub const MAX_SEARCH_LIMIT: u8 = 10;
pub const MAX_QUERY_LEN: usize = 200;

/// A named point returned by the geocoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[schema(example = "Majuli, Assam, India")]
    pub display_name: String,
    #[schema(example = 26.95)]
    pub latitude: f64,
    #[schema(example = 94.17)]
    pub longitude: f64,
}

/// WGS84 point with both components in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

fn parse_component(
    field: &str,
    raw: Option<&str>,
    bound: f64,
    issues: &mut Vec<ValidationIssue>,
) -> Option<f64> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        issues.push(ValidationIssue::new(field, format!("{} is required", field)));
        return None;
    };

    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && (-bound..=bound).contains(&v) => Some(v),
        Ok(_) => {
            issues.push(ValidationIssue::new(
                field,
                format!("{} must be between -{} and {}", field, bound, bound),
            ));
            None
        }
        Err(_) => {
            issues.push(ValidationIssue::new(field, format!("{} must be a number", field)));
            None
        }
    }
}

impl Coordinates {
    /// Parses query-string values, reporting each bad component.
    pub fn parse(lat: Option<&str>, lon: Option<&str>) -> Result<Self, Vec<ValidationIssue>> {
        let mut issues = Vec::new();
        let latitude = parse_component("lat", lat, 90.0, &mut issues);
        let longitude = parse_component("lon", lon, 180.0, &mut issues);

        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Ok(Self {
                latitude,
                longitude,
            }),
            _ => Err(issues),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}
