use super::*;

/// Tests that category names are unique.
///
/// Expected: Err with a unique constraint violation on the second insert
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let params = CategoryParams {
        name: "Fruit".to_string(),
        image_url: None,
    };

    let created = repo.create(params.clone()).await?;
    assert!(created.subcategories.is_empty());

    let result = repo.create(params).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
