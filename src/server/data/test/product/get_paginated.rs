use super::*;

/// Tests that listings hide soft-deleted products.
///
/// Expected: Ok with only the live product and a total of 1
#[tokio::test]
async fn excludes_deleted_products() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (shop, category, live) = factory::helpers::create_product_with_dependencies(db).await?;
    factory::product::ProductFactory::new(db, shop.id, category.id)
        .deleted()
        .build()
        .await?;

    let (products, total) = ProductRepository::new(db)
        .get_paginated(ProductFilter::default(), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(products[0].id, live.id);

    Ok(())
}

/// Tests the case-insensitive name search combined with a shop filter.
///
/// Expected: Ok with only the matching product of the filtered shop
#[tokio::test]
async fn filters_by_search_and_shop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::create_shop(db).await?;
    let other_shop = factory::create_shop(db).await?;
    let category = factory::create_category(db).await?;

    let apples = factory::product::ProductFactory::new(db, shop.id, category.id)
        .name("Green Apples")
        .build()
        .await?;
    factory::product::ProductFactory::new(db, shop.id, category.id)
        .name("Bananas")
        .build()
        .await?;
    factory::product::ProductFactory::new(db, other_shop.id, category.id)
        .name("Red Apples")
        .build()
        .await?;

    let (products, total) = ProductRepository::new(db)
        .get_paginated(
            ProductFilter {
                shop_id: Some(shop.id),
                search: Some("apple".to_string()),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(products[0].id, apples.id);

    Ok(())
}

/// Tests the subcategory filter.
///
/// Expected: Ok with only the product in the subcategory
#[tokio::test]
async fn filters_by_subcategory() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shop = factory::create_shop(db).await?;
    let category = factory::create_category(db).await?;
    let subcategory = factory::create_subcategory(db, category.id).await?;

    let tagged = factory::product::ProductFactory::new(db, shop.id, category.id)
        .subcategory_id(subcategory.id)
        .build()
        .await?;
    factory::create_product(db, shop.id, category.id).await?;

    let (products, total) = ProductRepository::new(db)
        .get_paginated(
            ProductFilter {
                subcategory_id: Some(subcategory.id),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(products[0].id, tagged.id);

    Ok(())
}
