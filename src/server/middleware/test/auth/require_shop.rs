use super::*;

/// Tests that a shop session resolves to the shop.
///
/// Expected: Ok(Shop)
#[tokio::test]
async fn resolves_logged_in_shop() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let shop = factory::create_shop(db).await?;
    AuthSession::new(session).set_shop_id(shop.id).await?;

    let resolved = AuthGuard::new(db, session).require_shop().await?;

    assert_eq!(resolved.id, shop.id);

    Ok(())
}

/// Tests that a user session does not grant shop access.
///
/// Expected: Err(AuthError::NotInSession(Shop))
#[tokio::test]
async fn user_session_is_not_a_shop_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_shop_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session).require_shop().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotInSession(Principal::Shop)))
    ));

    Ok(())
}
