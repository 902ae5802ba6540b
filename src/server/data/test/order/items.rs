use super::*;

/// Tests finding an order line and flagging it reviewed once.
///
/// Expected: Ok(true) on first mark, Ok(false) on the second
#[tokio::test]
async fn marks_item_reviewed_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _shop, product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let repo = OrderRepository::new(db);

    let item = repo.find_item(order.id, product.id).await?.unwrap();
    assert!(!item.is_reviewed);

    assert!(repo.mark_item_reviewed(item.id).await?);
    assert!(!repo.mark_item_reviewed(item.id).await?);

    let item = repo.find_item(order.id, product.id).await?.unwrap();
    assert!(item.is_reviewed);

    Ok(())
}

/// Tests looking up a product that is not in the order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_product_not_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, shop, _product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let category = factory::create_category(db).await?;
    let other = factory::create_product(db, shop.id, category.id).await?;

    let item = OrderRepository::new(db).find_item(order.id, other.id).await?;

    assert!(item.is_none());

    Ok(())
}
