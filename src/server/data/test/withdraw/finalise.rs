use super::*;

/// Tests that a processing request can be finalised exactly once.
///
/// Expected: Ok(true) then Ok(false), status stays `succeeded`
#[tokio::test]
async fn finalises_processing_request_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::create_shop(db).await?;
    let repo = WithdrawRequestRepository::new(db);
    let request = repo.create(shop.id, 6_000).await?;

    assert_eq!(request.status, WithdrawStatus::Processing);
    assert!(repo.finalise(request.id, WithdrawStatus::Succeeded).await?);
    assert!(!repo.finalise(request.id, WithdrawStatus::Rejected).await?);

    let stored = repo.find_by_id(request.id).await?.unwrap();
    assert_eq!(stored.status, WithdrawStatus::Succeeded);

    Ok(())
}
