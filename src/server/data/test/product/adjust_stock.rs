use super::*;

/// Tests selling and then restoring units.
///
/// Expected: Ok with stock 7 / sold 3 after selling, back to 10 / 0 after restoring
#[tokio::test]
async fn moves_units_between_stock_and_sold() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_shop, _category, product) =
        factory::helpers::create_product_with_dependencies(db).await?;
    let repo = ProductRepository::new(db);

    let sold = repo.adjust_stock(product.id, 3).await?.unwrap();
    assert_eq!(sold.stock, 7);
    assert_eq!(sold.sold_out, 3);

    let restored = repo.adjust_stock(product.id, -3).await?.unwrap();
    assert_eq!(restored.stock, 10);
    assert_eq!(restored.sold_out, 0);

    Ok(())
}
