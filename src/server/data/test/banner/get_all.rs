use super::*;

/// Tests listing banners by position, with and without inactive ones.
///
/// Expected: Ok with all three by position, or only the two active ones
#[tokio::test]
async fn orders_by_position_and_filters_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Banner)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let third = factory::create_banner(db, 3, true).await?;
    let first = factory::create_banner(db, 1, true).await?;
    let hidden = factory::create_banner(db, 2, false).await?;

    let repo = BannerRepository::new(db);

    let all: Vec<i32> = repo.get_all(false).await?.iter().map(|b| b.id).collect();
    assert_eq!(all, vec![first.id, hidden.id, third.id]);

    let active: Vec<i32> = repo.get_all(true).await?.iter().map(|b| b.id).collect();
    assert_eq!(active, vec![first.id, third.id]);

    Ok(())
}
