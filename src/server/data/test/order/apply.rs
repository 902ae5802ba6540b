use super::*;

/// Tests applying a delivery with its settlement columns.
///
/// Expected: Ok with status, payment, settled amount and delivery time stored
#[tokio::test]
async fn stores_status_and_settlement_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _shop, _product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let delivered_at = Utc::now();

    let updated = OrderRepository::new(db)
        .apply(
            order.id,
            OrderUpdate {
                payment_status: Some(PaymentStatus::Succeeded),
                settled_amount: Some(900),
                delivered_at: Some(delivered_at),
                ..OrderUpdate::status(OrderStatus::Delivered)
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, OrderStatus::Delivered);
    assert_eq!(updated.payment_status, PaymentStatus::Succeeded);
    assert_eq!(updated.settled_amount, 900);
    assert_eq!(updated.delivered_at, Some(delivered_at));
    assert_eq!(updated.items.len(), 1);

    Ok(())
}

/// Tests that unset fields keep their stored values.
///
/// Expected: Ok with only the status changed
#[tokio::test]
async fn leaves_unset_fields_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _shop, _product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;

    let updated = OrderRepository::new(db)
        .apply(order.id, OrderUpdate::status(OrderStatus::Cancelled))
        .await?
        .unwrap();

    assert_eq!(updated.status, OrderStatus::Cancelled);
    assert_eq!(updated.payment_status, PaymentStatus::Pending);
    assert_eq!(updated.delivery_man_id, None);
    assert_eq!(updated.settled_amount, 0);

    Ok(())
}
