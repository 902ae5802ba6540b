use super::*;

/// Tests deactivating a delivery-man.
///
/// Expected: Ok(Some) with `active` false and the new phone number
#[tokio::test]
async fn updates_profile_and_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let delivery_man = factory::create_delivery_man(db).await?;

    let updated = DeliveryManRepository::new(db)
        .update(UpdateDeliveryManParams {
            id: delivery_man.id,
            name: delivery_man.name.clone(),
            phone_number: "555-0000".to_string(),
            vehicle: None,
            active: false,
        })
        .await?
        .unwrap();

    assert!(!updated.active);
    assert_eq!(updated.phone_number, "555-0000");

    Ok(())
}

/// Tests that deleting a delivery-man clears assignments on their orders.
///
/// Expected: Ok(true) and the order keeps a null delivery-man
#[tokio::test]
async fn delete_unassigns_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, shop, product, _) = factory::helpers::create_order_with_dependencies(db).await?;
    let delivery_man = factory::create_delivery_man(db).await?;
    let order = factory::order::OrderFactory::new(db, user.id, shop.id)
        .item(product.id, 100, 1)
        .status("Delivered")
        .delivery_man_id(delivery_man.id)
        .build()
        .await?;

    assert!(DeliveryManRepository::new(db).delete(delivery_man.id).await?);

    let stored = crate::server::data::order::OrderRepository::new(db)
        .find_by_id(order.id)
        .await?
        .unwrap();
    assert_eq!(stored.delivery_man_id, None);

    Ok(())
}
