use super::*;

fn params(title: &str) -> BannerParams {
    BannerParams {
        title: title.to_string(),
        image_url: "https://cdn.example.com/b.jpg".to_string(),
        link: Some("/events".to_string()),
        position: 5,
        active: false,
    }
}

/// Tests updating a banner.
///
/// Expected: Ok(Some) with every field replaced
#[tokio::test]
async fn replaces_banner_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Banner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let banner = factory::create_banner(db, 1, true).await?;

    let updated = BannerRepository::new(db)
        .update(banner.id, params("Summer sale"))
        .await?
        .unwrap();

    assert_eq!(updated.title, "Summer sale");
    assert_eq!(updated.position, 5);
    assert!(!updated.active);
    assert_eq!(updated.link.as_deref(), Some("/events"));

    Ok(())
}

/// Tests updating a banner that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_banner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Banner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BannerRepository::new(db).update(7, params("Nope")).await?;

    assert!(result.is_none());

    Ok(())
}
