use super::*;

/// Tests creating a delivery-man.
///
/// Expected: Ok with an active delivery-man found by email
#[tokio::test]
async fn creates_active_delivery_man() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DeliveryManRepository::new(db);
    let created = repo
        .create(CreateDeliveryManParams {
            name: "Dan".to_string(),
            email: "dan@example.com".to_string(),
            password_hash: "hash".to_string(),
            phone_number: "555-0199".to_string(),
            vehicle: Some("Bike".to_string()),
        })
        .await?;

    assert!(created.active);

    let found = repo.find_by_email("dan@example.com").await?.unwrap();
    assert_eq!(found.id, created.id);

    let (all, total) = repo.get_all_paginated(0, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(all[0].vehicle.as_deref(), Some("Bike"));

    Ok(())
}
