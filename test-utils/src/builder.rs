use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with a chosen set of tables.
///
/// Tables are created in the order they were added, so parents must be added
/// before children (SQLite enforces foreign keys on insert).
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, UserAddress};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(UserAddress)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// The CREATE TABLE statement is generated from the SeaORM entity with the
    /// SQLite backend, including foreign keys declared by its relations.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the customer account tables: `User`, `UserAddress`.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(UserAddress)
    }

    /// Adds the seller account and settlement tables.
    ///
    /// `Shop`, `ShopWithdrawMethod`, `WithdrawRequest`, `ShopTransaction`.
    pub fn with_shop_tables(self) -> Self {
        self.with_table(Shop)
            .with_table(ShopWithdrawMethod)
            .with_table(WithdrawRequest)
            .with_table(ShopTransaction)
    }

    /// Adds everything a shop lists: shop tables plus `Category`,
    /// `Subcategory`, `Product`, `Event` and `Coupon`.
    pub fn with_catalog_tables(self) -> Self {
        self.with_shop_tables()
            .with_table(Category)
            .with_table(Subcategory)
            .with_table(Product)
            .with_table(Event)
            .with_table(Coupon)
    }

    /// Adds every table needed to place, fulfil, settle and review orders.
    ///
    /// Equivalent to user tables, catalog tables, then `DeliveryMan`, `Order`,
    /// `OrderItem` and `ProductReview`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_order_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_order_tables(self) -> Self {
        self.with_user_tables()
            .with_catalog_tables()
            .with_table(DeliveryMan)
            .with_table(Order)
            .with_table(OrderItem)
            .with_table(ProductReview)
    }

    /// Builds the context and creates all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
