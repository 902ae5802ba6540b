use super::*;

/// Tests listing categories with their subcategories.
///
/// Expected: Ok with categories sorted by name and subcategories nested
#[tokio::test]
async fn lists_categories_sorted_with_subcategories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let vegetables = factory::category::create_category_with_name(db, "Vegetables").await?;
    factory::category::create_category_with_name(db, "Bakery").await?;
    repo.create_subcategory(vegetables.id, "Roots".to_string())
        .await?;
    repo.create_subcategory(vegetables.id, "Greens".to_string())
        .await?;

    let categories = repo.get_all().await?;

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Bakery");
    assert!(categories[0].subcategories.is_empty());
    assert_eq!(categories[1].name, "Vegetables");
    let names: Vec<_> = categories[1]
        .subcategories
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Greens", "Roots"]);

    Ok(())
}
