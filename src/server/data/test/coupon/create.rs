use super::*;

fn params(shop_id: i32, code: &str) -> CreateCouponParams {
    CreateCouponParams {
        shop_id,
        code: code.to_string(),
        value: 15,
        min_amount: Some(1_000),
        max_amount: None,
        product_id: None,
    }
}

/// Tests that a created coupon is found by its exact code only.
///
/// Expected: Ok with a match for "SPRING" and none for "spring"
#[tokio::test]
async fn finds_coupon_by_exact_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::create_shop(db).await?;
    let repo = CouponRepository::new(db);

    let coupon = repo.create(params(shop.id, "SPRING")).await?;

    let found = repo.find_by_code("SPRING").await?.unwrap();
    assert_eq!(found.id, coupon.id);
    assert_eq!(found.value, 15);
    assert_eq!(found.min_amount, Some(1_000));
    assert!(repo.find_by_code("spring").await?.is_none());

    Ok(())
}

/// Tests that coupon codes are unique across shops.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::create_shop(db).await?;
    let other = factory::create_shop(db).await?;
    let repo = CouponRepository::new(db);

    repo.create(params(shop.id, "SAVE")).await?;
    let result = repo.create(params(other.id, "SAVE")).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
