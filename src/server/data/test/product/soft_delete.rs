use super::*;

/// Tests soft-deleting a product.
///
/// Verifies the row is kept with `deleted_at` set and a second delete is a no-op.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn marks_deleted_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (shop, _category, product) =
        factory::helpers::create_product_with_dependencies(db).await?;
    let repo = ProductRepository::new(db);

    assert!(repo.soft_delete(product.id).await?);
    assert!(!repo.soft_delete(product.id).await?);

    let stored = repo.find_by_id(product.id).await?.unwrap();
    assert!(stored.is_deleted());
    assert!(repo.find_owned(product.id, shop.id).await?.is_none());

    Ok(())
}
