use super::*;

/// Tests that deleting a shop removes its listings.
///
/// Expected: Ok(true) with the shop's products, events and coupons gone
#[tokio::test]
async fn cascades_to_catalogue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (shop, category, _product) =
        factory::helpers::create_product_with_dependencies(db).await?;
    factory::create_event(db, shop.id, category.id).await?;
    factory::create_coupon(db, shop.id).await?;

    let deleted = ShopRepository::new(db).delete(shop.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Product::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Event::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Coupon::find().count(db).await?, 0);

    Ok(())
}
