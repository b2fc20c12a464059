use async_trait::async_trait;

use crate::modules::incident::application::domain::entities::{
    is_valid_latitude, is_valid_longitude, Incident, MAX_DETAILS_LEN, MAX_DISEASE_LEN,
};
use crate::shared::validation::ValidationIssue;

/// Validated incident report.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIncidentCommand {
    disease: String,
    latitude: f64,
    longitude: f64,
    details: Option<String>,
}

impl CreateIncidentCommand {
    /// Collects every problem instead of stopping at the first one.
    pub fn new(
        disease: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        details: Option<String>,
    ) -> Result<Self, Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let disease = disease.map(|d| d.trim().to_string()).unwrap_or_default();
        if disease.is_empty() {
            issues.push(ValidationIssue::new("disease", "disease is required"));
        } else if disease.chars().count() > MAX_DISEASE_LEN {
            issues.push(ValidationIssue::new(
                "disease",
                format!("disease must be at most {} characters", MAX_DISEASE_LEN),
            ));
        }

        match latitude {
            None => issues.push(ValidationIssue::new("latitude", "latitude is required")),
            Some(lat) if !is_valid_latitude(lat) => issues.push(ValidationIssue::new(
                "latitude",
                "latitude must be between -90 and 90",
            )),
            Some(_) => {}
        }

        match longitude {
            None => issues.push(ValidationIssue::new("longitude", "longitude is required")),
            Some(lon) if !is_valid_longitude(lon) => issues.push(ValidationIssue::new(
                "longitude",
                "longitude must be between -180 and 180",
            )),
            Some(_) => {}
        }

        let details = details
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        if let Some(d) = &details {
            if d.chars().count() > MAX_DETAILS_LEN {
                issues.push(ValidationIssue::new(
                    "details",
                    format!("details must be at most {} characters", MAX_DETAILS_LEN),
                ));
            }
        }

        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) if issues.is_empty() => Ok(Self {
                disease,
                latitude,
                longitude,
                details,
            }),
            _ => Err(issues),
        }
    }

    pub fn disease(&self) -> &str {
        &self.disease
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateIncidentError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateIncidentUseCase: Send + Sync {
    async fn execute(&self, command: CreateIncidentCommand) -> Result<Incident, CreateIncidentError>;
}
