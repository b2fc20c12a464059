use async_trait::async_trait;

use crate::modules::geocoding::application::domain::entities::{
    Place, DEFAULT_SEARCH_LIMIT, MAX_QUERY_LEN, MAX_SEARCH_LIMIT,
};
use crate::shared::validation::ValidationIssue;

/// Forward lookup. Limits above the maximum are clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPlacesCommand {
    query: String,
    limit: u8,
}

impl SearchPlacesCommand {
    pub fn new(query: Option<String>, limit: Option<&str>) -> Result<Self, Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let query = query.map(|q| q.trim().to_string()).unwrap_or_default();
        if query.is_empty() {
            issues.push(ValidationIssue::new("q", "q is required"));
        } else if query.chars().count() > MAX_QUERY_LEN {
            issues.push(ValidationIssue::new(
                "q",
                format!("q must be at most {} characters", MAX_QUERY_LEN),
            ));
        }

        let limit = match limit.map(str::trim).filter(|l| !l.is_empty()) {
            None => DEFAULT_SEARCH_LIMIT,
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) | Err(_) => {
                    issues.push(ValidationIssue::new("limit", "limit must be a positive integer"));
                    DEFAULT_SEARCH_LIMIT
                }
                Ok(n) => n.min(MAX_SEARCH_LIMIT as u64) as u8,
            },
        };

        if issues.is_empty() {
            Ok(Self { query, limit })
        } else {
            Err(issues)
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn limit(&self) -> u8 {
        self.limit
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchPlacesError {
    #[error("Geocoder unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait SearchPlacesUseCase: Send + Sync {
    async fn execute(&self, command: SearchPlacesCommand) -> Result<Vec<Place>, SearchPlacesError>;
}
