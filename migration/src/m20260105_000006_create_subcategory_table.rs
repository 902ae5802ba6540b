use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000005_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subcategory::Table)
                    .if_not_exists()
                    .col(pk_auto(Subcategory::Id))
                    .col(integer(Subcategory::CategoryId))
                    .col(string(Subcategory::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subcategory_category_id")
                            .from(Subcategory::Table, Subcategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subcategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Subcategory {
    Table,
    Id,
    CategoryId,
    Name,
}
