use super::*;

/// Tests counting a delivery-man's in-flight orders.
///
/// Delivered and processing orders do not count.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_only_in_flight_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, shop, product, _) = factory::helpers::create_order_with_dependencies(db).await?;
    let delivery_man = factory::create_delivery_man(db).await?;

    for status in ["Shipping", "OnTheWay", "Delivered", "Processing"] {
        factory::order::OrderFactory::new(db, user.id, shop.id)
            .item(product.id, 100, 1)
            .status(status)
            .delivery_man_id(delivery_man.id)
            .build()
            .await?;
    }

    let count = OrderRepository::new(db)
        .count_in_flight_for_delivery_man(delivery_man.id)
        .await?;

    assert_eq!(count, 2);

    Ok(())
}
