use super::*;

/// Tests promoting a user to admin.
///
/// Expected: Ok(true) and `admin_exists` reports an admin
#[tokio::test]
async fn promotes_user_to_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(!repo.admin_exists().await?);

    let changed = repo.set_role(user.id, UserRole::Admin).await?;

    assert!(changed);
    assert!(repo.admin_exists().await?);
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.role, UserRole::Admin);

    Ok(())
}

/// Tests setting the role of a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let changed = UserRepository::new(db).set_role(999, UserRole::Admin).await?;

    assert!(!changed);

    Ok(())
}
