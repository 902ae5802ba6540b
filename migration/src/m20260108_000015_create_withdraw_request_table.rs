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
                    .table(WithdrawRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(WithdrawRequest::Id))
                    .col(integer(WithdrawRequest::ShopId))
                    .col(big_integer(WithdrawRequest::Amount))
                    .col(string(WithdrawRequest::Status).default("processing"))
                    .col(
                        timestamp_with_time_zone(WithdrawRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(WithdrawRequest::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_withdraw_request_shop_id")
                            .from(WithdrawRequest::Table, WithdrawRequest::ShopId)
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
            .drop_table(Table::drop().table(WithdrawRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WithdrawRequest {
    Table,
    Id,
    ShopId,
    Amount,
    Status,
    CreatedAt,
    UpdatedAt,
}
