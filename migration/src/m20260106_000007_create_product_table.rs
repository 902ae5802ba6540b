use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_shop_table::Shop, m20260105_000005_create_category_table::Category,
    m20260105_000006_create_subcategory_table::Subcategory,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(integer(Product::ShopId))
                    .col(integer(Product::CategoryId))
                    .col(integer_null(Product::SubcategoryId))
                    .col(string(Product::Name))
                    .col(text(Product::Description))
                    .col(string_null(Product::Tags))
                    .col(big_integer_null(Product::OriginalPrice))
                    .col(big_integer(Product::DiscountPrice))
                    .col(integer(Product::Stock))
                    .col(integer(Product::SoldOut).default(0))
                    .col(json(Product::Images))
                    .col(double(Product::Rating).default(0.0))
                    .col(integer(Product::ReviewCount).default(0))
                    .col(
                        timestamp_with_time_zone(Product::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Product::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_shop_id")
                            .from(Product::Table, Product::ShopId)
                            .to(Shop::Table, Shop::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_category_id")
                            .from(Product::Table, Product::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_subcategory_id")
                            .from(Product::Table, Product::SubcategoryId)
                            .to(Subcategory::Table, Subcategory::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_shop_id")
                    .table(Product::Table)
                    .col(Product::ShopId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    ShopId,
    CategoryId,
    SubcategoryId,
    Name,
    Description,
    Tags,
    OriginalPrice,
    DiscountPrice,
    Stock,
    SoldOut,
    Images,
    Rating,
    ReviewCount,
    CreatedAt,
    DeletedAt,
}
