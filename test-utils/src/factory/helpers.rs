//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values (emails, names, codes) in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Placeholder stored as `password_hash` when a test does not log in.
///
/// Not a valid argon2 hash; login attempts against it fail verification.
pub const PLACEHOLDER_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$placeholder$placeholder";

/// Creates a shop, a category and one product listed by that shop.
///
/// # Returns
/// - `Ok((shop, category, product))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_product_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::shop::Model,
        entity::category::Model,
        entity::product::Model,
    ),
    DbErr,
> {
    let shop = crate::factory::shop::create_shop(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let product = crate::factory::product::create_product(db, shop.id, category.id).await?;

    Ok((shop, category, product))
}

/// Creates a customer, a shop with one product and a `Processing` order for it.
///
/// The order holds a single line of quantity 1 at the product's price.
///
/// # Returns
/// - `Ok((user, shop, product, order))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::shop::Model,
        entity::product::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let (shop, _category, product) = create_product_with_dependencies(db).await?;
    let order = crate::factory::order::OrderFactory::new(db, user.id, shop.id)
        .item(product.id, product.discount_price, 1)
        .build()
        .await?;

    Ok((user, shop, product, order))
}
