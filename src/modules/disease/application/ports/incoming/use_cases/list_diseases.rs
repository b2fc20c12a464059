use async_trait::async_trait;

use crate::modules::disease::application::domain::entities::Disease;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListDiseasesError {
    #[error("Failed to fetch diseases: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListDiseasesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Disease>, ListDiseasesError>;
}
