use super::*;

/// Tests that reviews carry the reviewer's name and feed the rating summary.
///
/// Expected: Ok with two reviews, mean 3.5 and count 2
#[tokio::test]
async fn summarises_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _shop, product, order) =
        factory::helpers::create_order_with_dependencies(db).await?;
    let repo = ProductReviewRepository::new(db);

    for rating in [3, 4] {
        repo.create(CreateReviewParams {
            user_id: user.id,
            product_id: product.id,
            order_id: order.id,
            rating,
            comment: "Fresh".to_string(),
        })
        .await?;
    }

    let reviews = repo.get_by_product(product.id).await?;
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].user_name, user.name);

    let (rating, count) = repo.rating_summary(product.id).await?;
    assert_eq!(rating, 3.5);
    assert_eq!(count, 2);

    Ok(())
}

/// Tests the summary of a product without reviews.
///
/// Expected: Ok((0.0, 0))
#[tokio::test]
async fn summary_is_zero_without_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_shop, _category, product) =
        factory::helpers::create_product_with_dependencies(db).await?;

    let summary = ProductReviewRepository::new(db)
        .rating_summary(product.id)
        .await?;

    assert_eq!(summary, (0.0, 0));

    Ok(())
}
