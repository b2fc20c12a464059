use async_trait::async_trait;

use crate::modules::disease::application::domain::entities::Disease;
use crate::modules::disease::application::ports::incoming::use_cases::{
    ListDiseasesError, ListDiseasesUseCase,
};
use crate::modules::disease::application::ports::outgoing::DiseaseQuery;

#[derive(Debug, Clone)]
pub struct ListDiseasesService<Q>
where
    Q: DiseaseQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListDiseasesService<Q>
where
    Q: DiseaseQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListDiseasesUseCase for ListDiseasesService<Q>
where
    Q: DiseaseQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Disease>, ListDiseasesError> {
        self.query
            .list_all()
            .await
            .map_err(|e| ListDiseasesError::QueryFailed(e.to_string()))
    }
}
