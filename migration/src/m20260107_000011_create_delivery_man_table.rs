use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeliveryMan::Table)
                    .if_not_exists()
                    .col(pk_auto(DeliveryMan::Id))
                    .col(string(DeliveryMan::Name))
                    .col(string_uniq(DeliveryMan::Email))
                    .col(string(DeliveryMan::PasswordHash))
                    .col(string(DeliveryMan::PhoneNumber))
                    .col(string_null(DeliveryMan::Vehicle))
                    .col(boolean(DeliveryMan::Active).default(true))
                    .col(
                        timestamp_with_time_zone(DeliveryMan::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeliveryMan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DeliveryMan {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    PhoneNumber,
    Vehicle,
    Active,
    CreatedAt,
}
