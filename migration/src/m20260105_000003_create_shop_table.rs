use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shop::Table)
                    .if_not_exists()
                    .col(pk_auto(Shop::Id))
                    .col(string(Shop::Name))
                    .col(string_uniq(Shop::Email))
                    .col(string(Shop::PasswordHash))
                    .col(text_null(Shop::Description))
                    .col(string(Shop::Address))
                    .col(string(Shop::PhoneNumber))
                    .col(string(Shop::ZipCode))
                    .col(string_null(Shop::Avatar))
                    .col(big_integer(Shop::AvailableBalance).default(0))
                    .col(
                        timestamp_with_time_zone(Shop::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shop::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shop {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Description,
    Address,
    PhoneNumber,
    ZipCode,
    Avatar,
    AvailableBalance,
    CreatedAt,
}
