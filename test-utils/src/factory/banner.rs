//! Banner factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a banner at the given position.
pub async fn create_banner(
    db: &DatabaseConnection,
    position: i32,
    active: bool,
) -> Result<entity::banner::Model, DbErr> {
    let id = next_id();

    entity::banner::ActiveModel {
        title: ActiveValue::Set(format!("Banner {}", id)),
        image_url: ActiveValue::Set(format!("https://cdn.example.com/banners/{}.jpg", id)),
        link: ActiveValue::Set(None),
        position: ActiveValue::Set(position),
        active: ActiveValue::Set(active),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
