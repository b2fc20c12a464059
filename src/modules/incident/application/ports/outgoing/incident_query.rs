use async_trait::async_trait;

use crate::modules::incident::application::domain::entities::Incident;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IncidentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait IncidentQuery: Send + Sync {
    /// Newest first.
    async fn list(&self, page: PageRequest) -> Result<PageResult<Incident>, IncidentQueryError>;
}
