use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_shop_table::Shop, m20260105_000005_create_category_table::Category,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::ShopId))
                    .col(integer(Event::CategoryId))
                    .col(string(Event::Name))
                    .col(text(Event::Description))
                    .col(string_null(Event::Tags))
                    .col(big_integer_null(Event::OriginalPrice))
                    .col(big_integer(Event::DiscountPrice))
                    .col(integer(Event::Stock))
                    .col(integer(Event::SoldOut).default(0))
                    .col(json(Event::Images))
                    .col(timestamp_with_time_zone(Event::StartDate))
                    .col(timestamp_with_time_zone(Event::FinishDate))
                    .col(string(Event::Status).default("running"))
                    .col(
                        timestamp_with_time_zone(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_shop_id")
                            .from(Event::Table, Event::ShopId)
                            .to(Shop::Table, Shop::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_category_id")
                            .from(Event::Table, Event::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    ShopId,
    CategoryId,
    Name,
    Description,
    Tags,
    OriginalPrice,
    DiscountPrice,
    Stock,
    SoldOut,
    Images,
    StartDate,
    FinishDate,
    Status,
    CreatedAt,
}
