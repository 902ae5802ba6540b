use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAddress::Table)
                    .if_not_exists()
                    .col(pk_auto(UserAddress::Id))
                    .col(integer(UserAddress::UserId))
                    .col(string(UserAddress::AddressType))
                    .col(string(UserAddress::Country))
                    .col(string(UserAddress::City))
                    .col(string(UserAddress::Address1))
                    .col(string_null(UserAddress::Address2))
                    .col(string(UserAddress::ZipCode))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_address_user_id")
                            .from(UserAddress::Table, UserAddress::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_address_user_type")
                    .table(UserAddress::Table)
                    .col(UserAddress::UserId)
                    .col(UserAddress::AddressType)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAddress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserAddress {
    Table,
    Id,
    UserId,
    AddressType,
    Country,
    City,
    Address1,
    Address2,
    ZipCode,
}
