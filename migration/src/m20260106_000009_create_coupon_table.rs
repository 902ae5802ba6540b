use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_shop_table::Shop, m20260106_000007_create_product_table::Product,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Coupon::Table)
                    .if_not_exists()
                    .col(pk_auto(Coupon::Id))
                    .col(integer(Coupon::ShopId))
                    .col(string_uniq(Coupon::Code))
                    .col(integer(Coupon::Value))
                    .col(big_integer_null(Coupon::MinAmount))
                    .col(big_integer_null(Coupon::MaxAmount))
                    .col(integer_null(Coupon::ProductId))
                    .col(
                        timestamp_with_time_zone(Coupon::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_coupon_shop_id")
                            .from(Coupon::Table, Coupon::ShopId)
                            .to(Shop::Table, Shop::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_coupon_product_id")
                            .from(Coupon::Table, Coupon::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Coupon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Coupon {
    Table,
    Id,
    ShopId,
    Code,
    Value,
    MinAmount,
    MaxAmount,
    ProductId,
    CreatedAt,
}
