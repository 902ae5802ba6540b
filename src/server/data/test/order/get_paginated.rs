use super::*;

/// Tests listing a user's orders newest first with their items.
///
/// Expected: Ok with the user's two orders, newest first, and no foreign order
#[tokio::test]
async fn lists_user_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, shop, product, _) = factory::helpers::create_order_with_dependencies(db).await?;
    let older = factory::order::OrderFactory::new(db, user.id, shop.id)
        .item(product.id, 500, 2)
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;
    let stranger = factory::create_user(db).await?;
    factory::order::OrderFactory::new(db, stranger.id, shop.id)
        .item(product.id, 500, 1)
        .build()
        .await?;

    let (orders, total) = OrderRepository::new(db)
        .get_paginated(
            OrderFilter {
                user_id: Some(user.id),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 2);
    assert_eq!(orders[1].id, older.id);
    assert!(orders.iter().all(|o| o.user_id == user.id));
    assert!(orders.iter().all(|o| o.items.len() == 1));

    Ok(())
}

/// Tests the status filter.
///
/// Expected: Ok with only the delivered order
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, shop, product, _) = factory::helpers::create_order_with_dependencies(db).await?;
    let delivered = factory::order::OrderFactory::new(db, user.id, shop.id)
        .item(product.id, 500, 1)
        .status("Delivered")
        .build()
        .await?;

    let (orders, total) = OrderRepository::new(db)
        .get_paginated(
            OrderFilter {
                shop_id: Some(shop.id),
                status: Some(OrderStatus::Delivered),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(orders[0].id, delivered.id);

    Ok(())
}
