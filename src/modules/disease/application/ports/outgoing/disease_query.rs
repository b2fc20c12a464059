use async_trait::async_trait;

use crate::modules::disease::application::domain::entities::Disease;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiseaseQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt disease record {slug}: {reason}")]
    CorruptRecord { slug: String, reason: String },
}

#[async_trait]
pub trait DiseaseQuery: Send + Sync {
    /// Whole catalog ordered by name.
    async fn list_all(&self) -> Result<Vec<Disease>, DiseaseQueryError>;

    /// `slug` is expected to be normalized already.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Disease>, DiseaseQueryError>;
}
