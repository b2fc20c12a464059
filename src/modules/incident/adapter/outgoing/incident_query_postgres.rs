use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};

use crate::modules::incident::application::domain::entities::Incident;
use crate::modules::incident::application::ports::outgoing::{IncidentQuery, IncidentQueryError};
use crate::shared::pagination::{PageRequest, PageResult};

use super::sea_orm_entity::{Column as IncidentColumn, Entity as IncidentEntity};

#[derive(Debug, Clone)]
pub struct IncidentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl IncidentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IncidentQuery for IncidentQueryPostgres {
    async fn list(&self, page: PageRequest) -> Result<PageResult<Incident>, IncidentQueryError> {
        let total = IncidentEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| IncidentQueryError::DatabaseError(e.to_string()))?;

        let items = IncidentEntity::find()
            .order_by_desc(IncidentColumn::CreatedAt)
            .order_by_desc(IncidentColumn::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(|e| IncidentQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(Incident::from)
            .collect();

        Ok(PageResult::new(items, page, total))
    }
}
