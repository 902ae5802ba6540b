//! Event factory for creating time-boxed promotional listings.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events.
///
/// Defaults to a `running` event that started an hour ago and finishes in a day.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    shop_id: i32,
    category_id: i32,
    name: String,
    discount_price: i64,
    start_date: DateTime<Utc>,
    finish_date: DateTime<Utc>,
    status: String,
}

impl<'a> EventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, shop_id: i32, category_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            shop_id,
            category_id,
            name: format!("Event {}", next_id()),
            discount_price: 500,
            start_date: now - Duration::hours(1),
            finish_date: now + Duration::days(1),
            status: "running".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn finish_date(mut self, finish_date: DateTime<Utc>) -> Self {
        self.finish_date = finish_date;
        self
    }

    /// Sets the status (`"running"` or `"ended"`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            shop_id: ActiveValue::Set(self.shop_id),
            category_id: ActiveValue::Set(self.category_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("Limited time offer".to_string()),
            tags: ActiveValue::Set(None),
            original_price: ActiveValue::Set(None),
            discount_price: ActiveValue::Set(self.discount_price),
            stock: ActiveValue::Set(20),
            sold_out: ActiveValue::Set(0),
            images: ActiveValue::Set(serde_json::json!([])),
            start_date: ActiveValue::Set(self.start_date),
            finish_date: ActiveValue::Set(self.finish_date),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a running event with default values.
pub async fn create_event(
    db: &DatabaseConnection,
    shop_id: i32,
    category_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, shop_id, category_id).build().await
}
