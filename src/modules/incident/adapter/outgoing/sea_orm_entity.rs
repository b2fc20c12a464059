use chrono::Utc;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::incident::application::domain::entities::Incident;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "incidents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub disease: String,
    #[sea_orm(column_type = "Double")]
    pub latitude: f64,
    #[sea_orm(column_type = "Double")]
    pub longitude: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub details: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Incident {
    fn from(m: Model) -> Self {
        Incident {
            id: m.id,
            disease: m.disease,
            latitude: m.latitude,
            longitude: m.longitude,
            details: m.details,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}
