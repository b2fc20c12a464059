use chrono::Utc;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::sms::application::domain::entities::{AlertStatus, Severity, SmsAlert};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sms_alerts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub disease_type: String,
    pub severity: String,
    pub affected_count: i32,
    pub location: String,
    #[sea_orm(column_type = "Text")]
    pub action_required: String,
    #[sea_orm(column_type = "Text")]
    pub message_content: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub recipients: Json,
    pub sent_count: i32,
    pub failed_count: i32,
    pub status: String,
    pub sent_by: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sms_responses::Entity")]
    Responses,
}

impl Related<super::sms_responses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Responses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Result<SmsAlert, String> {
        let severity = self.severity.parse::<Severity>().map_err(|e| format!("{}", e))?;
        let status = self.status.parse::<AlertStatus>().map_err(|e| format!("{}", e))?;
        let recipients = serde_json::from_value(self.recipients)
            .map_err(|e| format!("recipients is not a list of strings: {}", e))?;

        Ok(SmsAlert {
            id: self.id,
            disease_type: self.disease_type,
            severity,
            affected_count: self.affected_count,
            location: self.location,
            action_required: self.action_required,
            message_content: self.message_content,
            recipients,
            sent_count: self.sent_count,
            failed_count: self.failed_count,
            status,
            sent_by: self.sent_by,
            created_at: self.created_at.with_timezone(&Utc),
        })
    }
}
