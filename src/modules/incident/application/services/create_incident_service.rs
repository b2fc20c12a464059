use async_trait::async_trait;

use crate::modules::incident::application::domain::entities::Incident;
use crate::modules::incident::application::ports::incoming::use_cases::{
    CreateIncidentCommand, CreateIncidentError, CreateIncidentUseCase,
};
use crate::modules::incident::application::ports::outgoing::{IncidentRepository, NewIncident};

#[derive(Debug, Clone)]
pub struct CreateIncidentService<R>
where
    R: IncidentRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateIncidentService<R>
where
    R: IncidentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateIncidentUseCase for CreateIncidentService<R>
where
    R: IncidentRepository + Send + Sync,
{
    async fn execute(&self, command: CreateIncidentCommand) -> Result<Incident, CreateIncidentError> {
        let incident = self
            .repository
            .create(NewIncident {
                disease: command.disease().to_string(),
                latitude: command.latitude(),
                longitude: command.longitude(),
                details: command.details().map(str::to_string),
            })
            .await
            .map_err(|e| CreateIncidentError::RepositoryError(e.to_string()))?;

        tracing::info!(
            incident_id = %incident.id,
            disease = %incident.disease,
            "Incident reported"
        );

        Ok(incident)
    }
}
