use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_shop_table::Shop;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopWithdrawMethod::Table)
                    .if_not_exists()
                    .col(pk_auto(ShopWithdrawMethod::Id))
                    .col(integer_uniq(ShopWithdrawMethod::ShopId))
                    .col(string(ShopWithdrawMethod::BankName))
                    .col(string(ShopWithdrawMethod::BankCountry))
                    .col(string(ShopWithdrawMethod::BankSwiftCode))
                    .col(string(ShopWithdrawMethod::AccountNumber))
                    .col(string(ShopWithdrawMethod::AccountHolderName))
                    .col(string(ShopWithdrawMethod::BankAddress))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_withdraw_method_shop_id")
                            .from(ShopWithdrawMethod::Table, ShopWithdrawMethod::ShopId)
                            .to(Shop::Table, Shop::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopWithdrawMethod::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShopWithdrawMethod {
    Table,
    Id,
    ShopId,
    BankName,
    BankCountry,
    BankSwiftCode,
    AccountNumber,
    AccountHolderName,
    BankAddress,
}
