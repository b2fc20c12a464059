use async_trait::async_trait;

use crate::modules::disease::application::domain::entities::Disease;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetDiseaseError {
    #[error("Disease not found")]
    NotFound,

    #[error("Failed to fetch disease: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetDiseaseUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Disease, GetDiseaseError>;
}
