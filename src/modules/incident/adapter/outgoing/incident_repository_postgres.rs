use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

use crate::modules::incident::application::domain::entities::Incident;
use crate::modules::incident::application::ports::outgoing::{
    IncidentRepository, IncidentRepositoryError, NewIncident,
};

use super::sea_orm_entity::ActiveModel as IncidentActiveModel;

#[derive(Debug, Clone)]
pub struct IncidentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl IncidentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IncidentRepository for IncidentRepositoryPostgres {
    async fn create(&self, incident: NewIncident) -> Result<Incident, IncidentRepositoryError> {
        let model = IncidentActiveModel {
            id: Set(Uuid::new_v4()),
            disease: Set(incident.disease),
            latitude: Set(incident.latitude),
            longitude: Set(incident.longitude),
            details: Set(incident.details),
            created_at: Set(Utc::now().into()),
        }
        .insert(&*self.db)
        .await
        .map_err(|e| IncidentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.into())
    }
}
