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
                    .table(ShopTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(ShopTransaction::Id))
                    .col(integer(ShopTransaction::ShopId))
                    .col(integer_null(ShopTransaction::WithdrawRequestId))
                    .col(integer_null(ShopTransaction::OrderId))
                    .col(string(ShopTransaction::Kind))
                    .col(big_integer(ShopTransaction::Amount))
                    .col(
                        timestamp_with_time_zone(ShopTransaction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_transaction_shop_id")
                            .from(ShopTransaction::Table, ShopTransaction::ShopId)
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
            .drop_table(Table::drop().table(ShopTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShopTransaction {
    Table,
    Id,
    ShopId,
    WithdrawRequestId,
    OrderId,
    Kind,
    Amount,
    CreatedAt,
}
