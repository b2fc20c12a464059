use async_trait::async_trait;

use crate::modules::disease::application::domain::entities::{normalize_slug, Disease};
use crate::modules::disease::application::ports::incoming::use_cases::{
    GetDiseaseError, GetDiseaseUseCase,
};
use crate::modules::disease::application::ports::outgoing::DiseaseQuery;

#[derive(Debug, Clone)]
pub struct GetDiseaseService<Q>
where
    Q: DiseaseQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetDiseaseService<Q>
where
    Q: DiseaseQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetDiseaseUseCase for GetDiseaseService<Q>
where
    Q: DiseaseQuery + Send + Sync,
{
    async fn execute(&self, slug: &str) -> Result<Disease, GetDiseaseError> {
        let slug = normalize_slug(slug);
        if slug.is_empty() {
            return Err(GetDiseaseError::NotFound);
        }

        self.query
            .find_by_slug(&slug)
            .await
            .map_err(|e| GetDiseaseError::QueryFailed(e.to_string()))?
            .ok_or(GetDiseaseError::NotFound)
    }
}
