use super::*;

/// Tests pagination over users.
///
/// Verifies the total is the number of users, not the number of pages.
///
/// Expected: Ok with 2 users on the first page and a total of 5
#[tokio::test]
async fn returns_page_and_item_total() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_user(db).await?;
    }

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 2).await?;

    assert_eq!(users.len(), 2);
    assert_eq!(total, 5);

    let (last_page, _) = repo.get_all_paginated(2, 2).await?;
    assert_eq!(last_page.len(), 1);

    Ok(())
}

/// Tests pagination with no users.
///
/// Expected: Ok with an empty page and zero total
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (users, total) = UserRepository::new(db).get_all_paginated(0, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
