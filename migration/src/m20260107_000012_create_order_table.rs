use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260105_000003_create_shop_table::Shop,
    m20260107_000011_create_delivery_man_table::DeliveryMan,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(integer(Orders::UserId))
                    .col(integer(Orders::ShopId))
                    .col(integer_null(Orders::DeliveryManId))
                    .col(string(Orders::Status))
                    .col(string(Orders::PaymentStatus))
                    .col(string(Orders::PaymentType))
                    .col(string_null(Orders::PaymentReference))
                    .col(big_integer(Orders::Subtotal))
                    .col(big_integer(Orders::Discount).default(0))
                    .col(big_integer(Orders::TotalPrice))
                    .col(string_null(Orders::CouponCode))
                    .col(string(Orders::ShipName))
                    .col(string(Orders::ShipPhone))
                    .col(string(Orders::ShipCountry))
                    .col(string(Orders::ShipCity))
                    .col(string(Orders::ShipAddress1))
                    .col(string_null(Orders::ShipAddress2))
                    .col(string(Orders::ShipZipCode))
                    .col(big_integer(Orders::SettledAmount).default(0))
                    .col(
                        timestamp_with_time_zone(Orders::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Orders::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Orders::DeliveredAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_user_id")
                            .from(Orders::Table, Orders::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_shop_id")
                            .from(Orders::Table, Orders::ShopId)
                            .to(Shop::Table, Shop::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_delivery_man_id")
                            .from(Orders::Table, Orders::DeliveryManId)
                            .to(DeliveryMan::Table, DeliveryMan::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_shop_id")
                    .table(Orders::Table)
                    .col(Orders::ShopId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_user_id")
                    .table(Orders::Table)
                    .col(Orders::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    Id,
    UserId,
    ShopId,
    DeliveryManId,
    Status,
    PaymentStatus,
    PaymentType,
    PaymentReference,
    Subtotal,
    Discount,
    TotalPrice,
    CouponCode,
    ShipName,
    ShipPhone,
    ShipCountry,
    ShipCity,
    ShipAddress1,
    ShipAddress2,
    ShipZipCode,
    SettledAmount,
    CreatedAt,
    UpdatedAt,
    DeliveredAt,
}
