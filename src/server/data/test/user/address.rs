use super::*;

fn home(user_id: i32, city: &str) -> UpsertAddressParams {
    UpsertAddressParams {
        user_id,
        address_type: "Home".to_string(),
        country: "US".to_string(),
        city: city.to_string(),
        address1: "1 Main St".to_string(),
        address2: None,
        zip_code: "10001".to_string(),
    }
}

/// Tests that re-submitting an address type replaces the stored one.
///
/// Expected: Ok with one address row holding the second city
#[tokio::test]
async fn upsert_replaces_same_address_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserAddressRepository::new(db);

    let first = repo.upsert(home(user.id, "Boston")).await?;
    let second = repo.upsert(home(user.id, "Denver")).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.city, "Denver");
    assert_eq!(entity::prelude::UserAddress::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a user cannot delete another user's address.
///
/// Expected: Ok(false) and the address still exists
#[tokio::test]
async fn delete_ignores_foreign_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let repo = UserAddressRepository::new(db);
    let address = repo.upsert(home(owner.id, "Austin")).await?;

    let deleted = repo.delete(other.id, address.id).await?;

    assert!(!deleted);
    assert_eq!(repo.get_by_user(owner.id).await?.len(), 1);

    Ok(())
}
