use super::*;

/// Tests deleting a category that products still use.
///
/// Expected: Err with a foreign key violation and the category kept
#[tokio::test]
async fn refuses_category_in_use() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_shop, category, _product) =
        factory::helpers::create_product_with_dependencies(db).await?;
    let repo = CategoryRepository::new(db);

    let result = repo.delete(category.id).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert!(repo.find_by_id(category.id).await?.is_some());

    Ok(())
}

/// Tests deleting an unused category along with its subcategories.
///
/// Expected: Ok(true) and the subcategory is gone
#[tokio::test]
async fn deletes_unused_category_and_subcategories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let subcategory = factory::create_subcategory(db, category.id).await?;
    let repo = CategoryRepository::new(db);

    assert!(repo.delete(category.id).await?);
    assert!(repo.find_subcategory(subcategory.id).await?.is_none());

    Ok(())
}
