//! Category and subcategory factories.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a category named `"Category {id}"`.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    create_category_with_name(db, format!("Category {}", next_id())).await
}

/// Creates a category with a specific name.
pub async fn create_category_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::category::Model, DbErr> {
    entity::category::ActiveModel {
        name: ActiveValue::Set(name.into()),
        image_url: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a subcategory under the given category.
pub async fn create_subcategory(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::subcategory::Model, DbErr> {
    entity::subcategory::ActiveModel {
        category_id: ActiveValue::Set(category_id),
        name: ActiveValue::Set(format!("Subcategory {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}
