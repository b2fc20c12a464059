use async_trait::async_trait;

use crate::modules::incident::application::domain::entities::Incident;

#[derive(Debug, Clone, PartialEq)]
pub struct NewIncident {
    pub disease: String,
    pub latitude: f64,
    pub longitude: f64,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IncidentRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait IncidentRepository: Send + Sync {
    async fn create(&self, incident: NewIncident) -> Result<Incident, IncidentRepositoryError>;
}
