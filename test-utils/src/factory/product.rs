//! Product factory for creating test catalogue entries.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let product = ProductFactory::new(&db, shop.id, category.id)
///     .discount_price(1_250)
///     .stock(3)
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    shop_id: i32,
    category_id: i32,
    subcategory_id: Option<i32>,
    name: String,
    original_price: Option<i64>,
    discount_price: i64,
    stock: i32,
    images: Vec<String>,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Product {id}"`
    /// - discount_price: `1000`, original_price: `None`
    /// - stock: `10`
    /// - images: one placeholder URL
    pub fn new(db: &'a DatabaseConnection, shop_id: i32, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            shop_id,
            category_id,
            subcategory_id: None,
            name: format!("Product {}", id),
            original_price: None,
            discount_price: 1_000,
            stock: 10,
            images: vec![format!("https://cdn.example.com/products/{}.jpg", id)],
            deleted_at: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn subcategory_id(mut self, subcategory_id: i32) -> Self {
        self.subcategory_id = Some(subcategory_id);
        self
    }

    pub fn original_price(mut self, original_price: i64) -> Self {
        self.original_price = Some(original_price);
        self
    }

    pub fn discount_price(mut self, discount_price: i64) -> Self {
        self.discount_price = discount_price;
        self
    }

    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Marks the product as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }

    /// Builds and inserts the product entity into the database.
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            shop_id: ActiveValue::Set(self.shop_id),
            category_id: ActiveValue::Set(self.category_id),
            subcategory_id: ActiveValue::Set(self.subcategory_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("Fresh from the test farm".to_string()),
            tags: ActiveValue::Set(None),
            original_price: ActiveValue::Set(self.original_price),
            discount_price: ActiveValue::Set(self.discount_price),
            stock: ActiveValue::Set(self.stock),
            sold_out: ActiveValue::Set(0),
            images: ActiveValue::Set(serde_json::json!(self.images)),
            rating: ActiveValue::Set(0.0),
            review_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(self.deleted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values for the given shop and category.
pub async fn create_product(
    db: &DatabaseConnection,
    shop_id: i32,
    category_id: i32,
) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db, shop_id, category_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::TestBuilder,
        factory::{category::create_category, shop::create_shop},
    };

    #[tokio::test]
    async fn creates_product_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let shop = create_shop(db).await?;
        let category = create_category(db).await?;
        let product = create_product(db, shop.id, category.id).await?;

        assert_eq!(product.shop_id, shop.id);
        assert_eq!(product.stock, 10);
        assert_eq!(product.sold_out, 0);
        assert!(product.deleted_at.is_none());
        assert_eq!(product.images.as_array().map(Vec::len), Some(1));

        Ok(())
    }
}
