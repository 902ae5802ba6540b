//! Shop factory for creating test seller accounts.

use crate::factory::helpers::{next_id, PLACEHOLDER_PASSWORD_HASH};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shops with customizable fields.
pub struct ShopFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password_hash: String,
    available_balance: i64,
}

impl<'a> ShopFactory<'a> {
    /// Creates a new ShopFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Shop {id}"`
    /// - email: `"shop{id}@example.com"`
    /// - available_balance: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Shop {}", id),
            email: format!("shop{}@example.com", id),
            password_hash: PLACEHOLDER_PASSWORD_HASH.to_string(),
            available_balance: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the starting balance in minor units.
    pub fn available_balance(mut self, available_balance: i64) -> Self {
        self.available_balance = available_balance;
        self
    }

    /// Builds and inserts the shop entity into the database.
    pub async fn build(self) -> Result<entity::shop::Model, DbErr> {
        entity::shop::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            description: ActiveValue::Set(None),
            address: ActiveValue::Set("1 Market Street".to_string()),
            phone_number: ActiveValue::Set("555-0100".to_string()),
            zip_code: ActiveValue::Set("10001".to_string()),
            avatar: ActiveValue::Set(None),
            available_balance: ActiveValue::Set(self.available_balance),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a shop with default values.
pub async fn create_shop(db: &DatabaseConnection) -> Result<entity::shop::Model, DbErr> {
    ShopFactory::new(db).build().await
}

/// Attaches a bank withdraw method to a shop.
pub async fn create_withdraw_method(
    db: &DatabaseConnection,
    shop_id: i32,
) -> Result<entity::shop_withdraw_method::Model, DbErr> {
    entity::shop_withdraw_method::ActiveModel {
        shop_id: ActiveValue::Set(shop_id),
        bank_name: ActiveValue::Set("First Test Bank".to_string()),
        bank_country: ActiveValue::Set("US".to_string()),
        bank_swift_code: ActiveValue::Set("FTBKUS33".to_string()),
        account_number: ActiveValue::Set("000123456789".to_string()),
        account_holder_name: ActiveValue::Set("Test Holder".to_string()),
        bank_address: ActiveValue::Set("2 Bank Road".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_shop_with_balance_and_withdraw_method() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let shop = ShopFactory::new(db).available_balance(2_500).build().await?;
        let method = create_withdraw_method(db, shop.id).await?;

        assert_eq!(shop.available_balance, 2_500);
        assert_eq!(method.shop_id, shop.id);

        Ok(())
    }
}
