use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260106_000007_create_product_table::Product,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductReview::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductReview::Id))
                    .col(integer(ProductReview::ProductId))
                    .col(integer(ProductReview::UserId))
                    .col(integer(ProductReview::OrderId))
                    .col(integer(ProductReview::Rating))
                    .col(text(ProductReview::Comment))
                    .col(
                        timestamp_with_time_zone(ProductReview::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_review_product_id")
                            .from(ProductReview::Table, ProductReview::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_review_user_id")
                            .from(ProductReview::Table, ProductReview::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductReview::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductReview {
    Table,
    Id,
    ProductId,
    UserId,
    OrderId,
    Rating,
    Comment,
    CreatedAt,
}
