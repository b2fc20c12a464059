use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Incidents::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Incidents::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Incidents::Disease).string_len(100).not_null())
                    .col(ColumnDef::new(Incidents::Latitude).double().not_null())
                    .col(ColumnDef::new(Incidents::Longitude).double().not_null())
                    .col(ColumnDef::new(Incidents::Details).text().null())
                    .col(
                        ColumnDef::new(Incidents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing is always newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_incidents_created_at
                ON incidents (created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_incidents_created_at")
            .await?;

        manager
            .drop_table(Table::drop().table(Incidents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Incidents {
    Table,
    Id,
    Disease,
    Latitude,
    Longitude,
    Details,
    CreatedAt,
}
