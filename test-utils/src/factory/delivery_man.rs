//! Delivery-man factory.

use crate::factory::helpers::{next_id, PLACEHOLDER_PASSWORD_HASH};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test delivery-men.
pub struct DeliveryManFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    password_hash: String,
    active: bool,
}

impl<'a> DeliveryManFactory<'a> {
    /// Creates a factory for an active delivery-man with a unique email.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            email: format!("rider{}@example.com", next_id()),
            password_hash: PLACEHOLDER_PASSWORD_HASH.to_string(),
            active: true,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::delivery_man::Model, DbErr> {
        entity::delivery_man::ActiveModel {
            name: ActiveValue::Set("Test Rider".to_string()),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            phone_number: ActiveValue::Set("555-0199".to_string()),
            vehicle: ActiveValue::Set(Some("bicycle".to_string())),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active delivery-man.
pub async fn create_delivery_man(
    db: &DatabaseConnection,
) -> Result<entity::delivery_man::Model, DbErr> {
    DeliveryManFactory::new(db).build().await
}
