//! Coupon factory for creating shop discount codes.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test coupons.
///
/// Defaults to a 10% coupon with a unique `CODE{id}` code and no bounds.
pub struct CouponFactory<'a> {
    db: &'a DatabaseConnection,
    shop_id: i32,
    code: String,
    value: i32,
    min_amount: Option<i64>,
    max_amount: Option<i64>,
    product_id: Option<i32>,
}

impl<'a> CouponFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, shop_id: i32) -> Self {
        Self {
            db,
            shop_id,
            code: format!("CODE{}", next_id()),
            value: 10,
            min_amount: None,
            max_amount: None,
            product_id: None,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the discount percentage.
    pub fn value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    pub fn min_amount(mut self, min_amount: i64) -> Self {
        self.min_amount = Some(min_amount);
        self
    }

    pub fn max_amount(mut self, max_amount: i64) -> Self {
        self.max_amount = Some(max_amount);
        self
    }

    /// Restricts the coupon to a single product.
    pub fn product_id(mut self, product_id: i32) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub async fn build(self) -> Result<entity::coupon::Model, DbErr> {
        entity::coupon::ActiveModel {
            shop_id: ActiveValue::Set(self.shop_id),
            code: ActiveValue::Set(self.code),
            value: ActiveValue::Set(self.value),
            min_amount: ActiveValue::Set(self.min_amount),
            max_amount: ActiveValue::Set(self.max_amount),
            product_id: ActiveValue::Set(self.product_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default 10% coupon for the shop.
pub async fn create_coupon(
    db: &DatabaseConnection,
    shop_id: i32,
) -> Result<entity::coupon::Model, DbErr> {
    CouponFactory::new(db, shop_id).build().await
}
