use chrono::Utc;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::sms::application::domain::entities::{ResponseType, SmsResponse, UrgencyLevel};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sms_responses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub phone: String,
    #[sea_orm(column_type = "Text")]
    pub message_text: String,
    pub alert_id: Option<Uuid>,
    pub cases_reported: i32,
    pub response_type: String,
    pub urgency_level: String,
    pub is_emergency: bool,
    pub received_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sms_alerts::Entity",
        from = "Column::AlertId",
        to = "super::sms_alerts::Column::Id",
        on_delete = "SetNull"
    )]
    Alert,
}

impl Related<super::sms_alerts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alert.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Result<SmsResponse, String> {
        let response_type = self.response_type.parse::<ResponseType>().map_err(|e| format!("{}", e))?;
        let urgency_level = self.urgency_level.parse::<UrgencyLevel>().map_err(|e| format!("{}", e))?;

        Ok(SmsResponse {
            id: self.id,
            phone: self.phone,
            message_text: self.message_text,
            alert_id: self.alert_id,
            cases_reported: self.cases_reported,
            response_type,
            urgency_level,
            is_emergency: self.is_emergency,
            received_at: self.received_at.with_timezone(&Utc),
        })
    }
}
