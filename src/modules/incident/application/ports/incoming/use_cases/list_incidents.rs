use async_trait::async_trait;

use crate::modules::incident::application::domain::entities::Incident;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListIncidentsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListIncidentsUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<PageResult<Incident>, ListIncidentsError>;
}
