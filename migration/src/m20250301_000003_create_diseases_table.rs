use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Diseases::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Diseases::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Diseases::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Diseases::Slug)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Diseases::Overview).text().not_null())
                    .col(ColumnDef::new(Diseases::Symptoms).json_binary().not_null())
                    .col(ColumnDef::new(Diseases::Causes).text().not_null())
                    .col(ColumnDef::new(Diseases::Prevention).json_binary().not_null())
                    .col(ColumnDef::new(Diseases::Treatment).text().not_null())
                    .col(
                        ColumnDef::new(Diseases::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Diseases::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Diseases {
    Table,
    Id,
    Name,
    Slug,
    Overview,
    Symptoms,
    Causes,
    Prevention,
    Treatment,
    CreatedAt,
}
