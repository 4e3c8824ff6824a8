//! Create dealers table

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
                    .table(Dealers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Dealers::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Dealers::UserId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Dealers::BusinessName).string().not_null())
                    .col(ColumnDef::new(Dealers::Address).string().not_null())
                    .col(ColumnDef::new(Dealers::Phone).string())
                    .col(
                        ColumnDef::new(Dealers::SubscriptionType)
                            .string()
                            .not_null()
                            .default("basic"),
                    )
                    .col(ColumnDef::new(Dealers::SubscriptionExpiresAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Dealers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dealers_user")
                            .from(Dealers::Table, Dealers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dealers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Dealers {
    Table,
    Id,
    UserId,
    BusinessName,
    Address,
    Phone,
    SubscriptionType,
    SubscriptionExpiresAt,
    CreatedAt,
}
