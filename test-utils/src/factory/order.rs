//! Order factory for creating orders with line items.
//!
//! Inserts rows directly; it does not touch product stock or shop balances.
//! Use the order service when a test needs placement side effects.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders.
///
/// # Example
///
/// ```rust,ignore
/// let order = OrderFactory::new(&db, user.id, shop.id)
///     .item(product.id, 1_000, 2)
///     .status("Delivered")
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    shop_id: i32,
    delivery_man_id: Option<i32>,
    status: String,
    payment_status: String,
    items: Vec<(i32, i64, i32)>,
    settled_amount: i64,
    created_at: DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a `Processing`, cash-on-delivery order with no lines.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, shop_id: i32) -> Self {
        Self {
            db,
            user_id,
            shop_id,
            delivery_man_id: None,
            status: "Processing".to_string(),
            payment_status: "Pending".to_string(),
            items: Vec::new(),
            settled_amount: 0,
            created_at: Utc::now(),
        }
    }

    /// Adds a line item; totals are derived from the lines.
    pub fn item(mut self, product_id: i32, unit_price: i64, quantity: i32) -> Self {
        self.items.push((product_id, unit_price, quantity));
        self
    }

    /// Sets the stored status string (e.g. `"Delivered"`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn payment_status(mut self, payment_status: impl Into<String>) -> Self {
        self.payment_status = payment_status.into();
        self
    }

    pub fn delivery_man_id(mut self, delivery_man_id: i32) -> Self {
        self.delivery_man_id = Some(delivery_man_id);
        self
    }

    pub fn settled_amount(mut self, settled_amount: i64) -> Self {
        self.settled_amount = settled_amount;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Inserts the order followed by each of its lines.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let subtotal: i64 = self
            .items
            .iter()
            .map(|(_, price, quantity)| price * *quantity as i64)
            .sum();

        let order = entity::order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            shop_id: ActiveValue::Set(self.shop_id),
            delivery_man_id: ActiveValue::Set(self.delivery_man_id),
            status: ActiveValue::Set(self.status),
            payment_status: ActiveValue::Set(self.payment_status),
            payment_type: ActiveValue::Set("cash_on_delivery".to_string()),
            payment_reference: ActiveValue::Set(None),
            subtotal: ActiveValue::Set(subtotal),
            discount: ActiveValue::Set(0),
            total_price: ActiveValue::Set(subtotal),
            coupon_code: ActiveValue::Set(None),
            ship_name: ActiveValue::Set("Test Customer".to_string()),
            ship_phone: ActiveValue::Set("555-0111".to_string()),
            ship_country: ActiveValue::Set("US".to_string()),
            ship_city: ActiveValue::Set("Springfield".to_string()),
            ship_address1: ActiveValue::Set("742 Evergreen Terrace".to_string()),
            ship_address2: ActiveValue::Set(None),
            ship_zip_code: ActiveValue::Set("49007".to_string()),
            settled_amount: ActiveValue::Set(self.settled_amount),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            delivered_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (product_id, unit_price, quantity) in self.items {
            entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                product_id: ActiveValue::Set(product_id),
                name: ActiveValue::Set(format!("Product {}", product_id)),
                unit_price: ActiveValue::Set(unit_price),
                quantity: ActiveValue::Set(quantity),
                image_url: ActiveValue::Set(None),
                is_reviewed: ActiveValue::Set(false),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(order)
    }
}

/// Creates an empty `Processing` order.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
    shop_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id, shop_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::helpers::create_order_with_dependencies};
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

    #[tokio::test]
    async fn creates_order_with_items_and_totals() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_user, _shop, product, order) = create_order_with_dependencies(db).await?;

        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order.id))
            .all(db)
            .await?;

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id, product.id);
        assert_eq!(order.total_price, product.discount_price);
        assert_eq!(order.status, "Processing");

        Ok(())
    }
}
