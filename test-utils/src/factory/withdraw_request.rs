//! Withdraw request factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a withdraw request row without touching the shop balance.
pub async fn create_withdraw_request(
    db: &DatabaseConnection,
    shop_id: i32,
    amount: i64,
    status: &str,
) -> Result<entity::withdraw_request::Model, DbErr> {
    let now = Utc::now();

    entity::withdraw_request::ActiveModel {
        shop_id: ActiveValue::Set(shop_id),
        amount: ActiveValue::Set(amount),
        status: ActiveValue::Set(status.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
