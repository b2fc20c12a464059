use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::modules::disease::application::domain::entities::Disease;
use crate::modules::disease::application::ports::outgoing::{DiseaseQuery, DiseaseQueryError};

use super::sea_orm_entity::{Column as DiseaseColumn, Entity as DiseaseEntity, Model as DiseaseModel};

#[derive(Debug, Clone)]
pub struct DiseaseQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DiseaseQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: DiseaseModel) -> Result<Disease, DiseaseQueryError> {
        let slug = model.slug.clone();
        model
            .into_domain()
            .map_err(|reason| DiseaseQueryError::CorruptRecord { slug, reason })
    }
}

#[async_trait]
impl DiseaseQuery for DiseaseQueryPostgres {
    async fn list_all(&self) -> Result<Vec<Disease>, DiseaseQueryError> {
        let models = DiseaseEntity::find()
            .order_by_asc(DiseaseColumn::Name)
            .all(&*self.db)
            .await
            .map_err(|e| DiseaseQueryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::to_domain).collect()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Disease>, DiseaseQueryError> {
        DiseaseEntity::find()
            .filter(DiseaseColumn::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(|e| DiseaseQueryError::DatabaseError(e.to_string()))?
            .map(Self::to_domain)
            .transpose()
    }
}
