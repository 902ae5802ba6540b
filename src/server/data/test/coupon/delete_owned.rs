use super::*;

/// Tests that a shop cannot delete another shop's coupon.
///
/// Expected: Ok(false) for the foreign shop, Ok(true) for the owner
#[tokio::test]
async fn deletes_only_own_coupon() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_shop(db).await?;
    let other = factory::create_shop(db).await?;
    let coupon = factory::create_coupon(db, owner.id).await?;
    let repo = CouponRepository::new(db);

    assert!(!repo.delete_owned(coupon.id, other.id).await?);
    assert!(repo.delete_owned(coupon.id, owner.id).await?);
    assert!(repo.get_by_shop(owner.id).await?.is_empty());

    Ok(())
}
