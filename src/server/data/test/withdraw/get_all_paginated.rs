use super::*;

/// Tests the admin listing with and without a status filter.
///
/// Expected: Ok with 3 requests in total and 2 processing
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::create_shop(db).await?;
    factory::create_withdraw_request(db, shop.id, 5_000, "processing").await?;
    factory::create_withdraw_request(db, shop.id, 7_000, "processing").await?;
    factory::create_withdraw_request(db, shop.id, 9_000, "succeeded").await?;

    let repo = WithdrawRequestRepository::new(db);

    let (_, total) = repo.get_all_paginated(None, 0, 10).await?;
    assert_eq!(total, 3);

    let (processing, total) = repo
        .get_all_paginated(Some(WithdrawStatus::Processing), 0, 10)
        .await?;
    assert_eq!(total, 2);
    assert!(processing
        .iter()
        .all(|r| r.status == WithdrawStatus::Processing));

    assert_eq!(repo.get_by_shop(shop.id).await?.len(), 3);

    Ok(())
}
