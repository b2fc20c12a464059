use chrono::Utc;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::disease::application::domain::entities::Disease;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "diseases")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub overview: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub symptoms: Json,
    #[sea_orm(column_type = "Text")]
    pub causes: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub prevention: Json,
    #[sea_orm(column_type = "Text")]
    pub treatment: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Fails when a JSON list column does not hold an array of strings.
    pub fn into_domain(self) -> Result<Disease, String> {
        let symptoms = string_list(self.symptoms, "symptoms")?;
        let prevention = string_list(self.prevention, "prevention")?;

        Ok(Disease {
            id: self.id,
            name: self.name,
            slug: self.slug,
            overview: self.overview,
            symptoms,
            causes: self.causes,
            prevention,
            treatment: self.treatment,
            created_at: self.created_at.with_timezone(&Utc),
        })
    }
}

fn string_list(value: Json, column: &str) -> Result<Vec<String>, String> {
    serde_json::from_value(value).map_err(|e| format!("{} is not a list of strings: {}", column, e))
}
