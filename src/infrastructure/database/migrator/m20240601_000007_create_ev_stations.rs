//! Create ev_stations table

use sea_orm_migration::prelude::*;

use super::m20240601_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EvStations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EvStations::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EvStations::UserId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(EvStations::Name).string().not_null())
                    .col(ColumnDef::new(EvStations::Address).string().not_null())
                    .col(
                        ColumnDef::new(EvStations::Availability)
                            .string()
                            .not_null()
                            .default("available"),
                    )
                    .col(
                        ColumnDef::new(EvStations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ev_stations_user")
                            .from(EvStations::Table, EvStations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EvStations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum EvStations {
    Table,
    Id,
    UserId,
    Name,
    Address,
    Availability,
    CreatedAt,
}
