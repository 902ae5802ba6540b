use super::*;

fn address() -> ShippingAddress {
    ShippingAddress {
        name: "Ada".to_string(),
        phone: "555-0100".to_string(),
        country: "US".to_string(),
        city: "Boston".to_string(),
        address1: "1 Main St".to_string(),
        address2: None,
        zip_code: "02101".to_string(),
    }
}

/// Tests inserting a priced order with its lines.
///
/// Expected: Ok with total = subtotal - discount, `Processing` and the lines attached
#[tokio::test]
async fn creates_processing_order_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (shop, _category, product) =
        factory::helpers::create_product_with_dependencies(db).await?;

    let order = OrderRepository::new(db)
        .create(NewOrder {
            user_id: user.id,
            shop_id: shop.id,
            payment_type: PaymentType::Card,
            payment_reference: Some("pi_123".to_string()),
            subtotal: 3_000,
            discount: 300,
            coupon_code: Some("TEN".to_string()),
            shipping_address: address(),
            items: vec![NewOrderItem {
                product_id: product.id,
                name: product.name.clone(),
                unit_price: 1_000,
                quantity: 3,
                image_url: None,
            }],
        })
        .await?;

    assert_eq!(order.total_price, 2_700);
    assert_eq!(order.status, OrderStatus::Processing);
    assert_eq!(order.payment_status, PaymentStatus::Succeeded);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, 3);
    assert_eq!(order.shipping_address, address());

    let reloaded = OrderRepository::new(db).find_by_id(order.id).await?.unwrap();
    assert_eq!(reloaded, order);

    Ok(())
}
