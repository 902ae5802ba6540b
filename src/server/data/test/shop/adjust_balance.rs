use super::*;

/// Tests crediting and then debiting a shop's balance.
///
/// Verifies the adjustment is added to the stored balance rather than
/// overwriting it.
///
/// Expected: Ok with 1500 after +1000 on 500, then 1200 after -300
#[tokio::test]
async fn adds_delta_to_existing_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::shop::ShopFactory::new(db)
        .available_balance(500)
        .build()
        .await?;
    let repo = ShopRepository::new(db);

    assert_eq!(repo.adjust_balance(shop.id, 1_000).await?, Some(1_500));
    assert_eq!(repo.adjust_balance(shop.id, -300).await?, Some(1_200));

    let stored = repo.find_by_id(shop.id).await?.unwrap();
    assert_eq!(stored.available_balance, 1_200);

    Ok(())
}

/// Tests adjusting the balance of a shop that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_shop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ShopRepository::new(db).adjust_balance(42, 100).await?;

    assert!(result.is_none());

    Ok(())
}
