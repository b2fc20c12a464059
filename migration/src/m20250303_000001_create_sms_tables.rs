use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SmsAlerts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(SmsAlerts::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(SmsAlerts::DiseaseType)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SmsAlerts::Severity).string_len(16).not_null())
                    .col(ColumnDef::new(SmsAlerts::AffectedCount).integer().not_null())
                    .col(ColumnDef::new(SmsAlerts::Location).string_len(255).not_null())
                    .col(ColumnDef::new(SmsAlerts::ActionRequired).text().not_null())
                    .col(ColumnDef::new(SmsAlerts::MessageContent).text().not_null())
                    .col(ColumnDef::new(SmsAlerts::Recipients).json_binary().not_null())
                    .col(ColumnDef::new(SmsAlerts::SentCount).integer().not_null())
                    .col(ColumnDef::new(SmsAlerts::FailedCount).integer().not_null())
                    .col(ColumnDef::new(SmsAlerts::Status).string_len(16).not_null())
                    .col(ColumnDef::new(SmsAlerts::SentBy).uuid().null())
                    .col(
                        ColumnDef::new(SmsAlerts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sms_alerts_sent_by")
                            .from(SmsAlerts::Table, SmsAlerts::SentBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SmsResponses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SmsResponses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SmsResponses::Phone).string_len(20).not_null())
                    .col(ColumnDef::new(SmsResponses::MessageText).text().not_null())
                    .col(ColumnDef::new(SmsResponses::AlertId).uuid().null())
                    .col(
                        ColumnDef::new(SmsResponses::CasesReported)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SmsResponses::ResponseType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SmsResponses::UrgencyLevel)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SmsResponses::IsEmergency)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SmsResponses::ReceivedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sms_responses_alert")
                            .from(SmsResponses::Table, SmsResponses::AlertId)
                            .to(SmsAlerts::Table, SmsAlerts::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_sms_alerts_created_at ON sms_alerts (created_at DESC);
                CREATE INDEX idx_sms_responses_received_at ON sms_responses (received_at DESC);
                CREATE INDEX idx_sms_responses_alert ON sms_responses (alert_id, received_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SmsResponses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SmsAlerts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SmsAlerts {
    Table,
    Id,
    DiseaseType,
    Severity,
    AffectedCount,
    Location,
    ActionRequired,
    MessageContent,
    Recipients,
    SentCount,
    FailedCount,
    Status,
    SentBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SmsResponses {
    Table,
    Id,
    Phone,
    MessageText,
    AlertId,
    CasesReported,
    ResponseType,
    UrgencyLevel,
    IsEmergency,
    ReceivedAt,
}
