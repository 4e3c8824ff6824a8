//! Create tyres table

use sea_orm_migration::prelude::*;

use super::m20240601_000002_create_dealers::Dealers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tyres::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tyres::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tyres::DealerId).string().not_null())
                    .col(ColumnDef::new(Tyres::Brand).string().not_null())
                    .col(ColumnDef::new(Tyres::Model).string().not_null())
                    .col(ColumnDef::new(Tyres::Size).string().not_null())
                    .col(
                        ColumnDef::new(Tyres::PriceMinor)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Tyres::Stock)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Tyres::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tyres_dealer")
                            .from(Tyres::Table, Tyres::DealerId)
                            .to(Dealers::Table, Dealers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tyres_dealer_id")
                    .table(Tyres::Table)
                    .col(Tyres::DealerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tyres_brand")
                    .table(Tyres::Table)
                    .col(Tyres::Brand)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tyres::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Tyres {
    Table,
    Id,
    DealerId,
    Brand,
    Model,
    Size,
    PriceMinor,
    Stock,
    CreatedAt,
}
