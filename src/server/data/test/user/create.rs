use super::*;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        name: "Ada".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        phone_number: None,
        avatar: None,
        role: UserRole::User,
    }
}

/// Tests creating a user and reading it back by email.
///
/// Expected: Ok with the user found by email and the `user` role
#[tokio::test]
async fn creates_user_found_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("ada@example.com")).await?;

    let found = repo.find_by_email("ada@example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert_eq!(user.role, UserRole::User);

    Ok(())
}

/// Tests that a second account with the same email is rejected.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("dup@example.com")).await?;

    let result = repo.create(params("dup@example.com")).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
