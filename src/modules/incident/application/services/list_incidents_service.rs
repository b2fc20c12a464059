use async_trait::async_trait;

use crate::modules::incident::application::domain::entities::Incident;
use crate::modules::incident::application::ports::incoming::use_cases::{
    ListIncidentsError, ListIncidentsUseCase,
};
use crate::modules::incident::application::ports::outgoing::IncidentQuery;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct ListIncidentsService<Q>
where
    Q: IncidentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListIncidentsService<Q>
where
    Q: IncidentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListIncidentsUseCase for ListIncidentsService<Q>
where
    Q: IncidentQuery + Send + Sync,
{
    async fn execute(&self, page: PageRequest) -> Result<PageResult<Incident>, ListIncidentsError> {
        self.query
            .list(page)
            .await
            .map_err(|e| ListIncidentsError::QueryError(e.to_string()))
    }
}
