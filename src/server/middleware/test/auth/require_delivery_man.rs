use super::*;

/// Tests that an active delivery-man session resolves.
///
/// Expected: Ok(DeliveryMan)
#[tokio::test]
async fn resolves_active_delivery_man() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let delivery_man = factory::create_delivery_man(db).await?;
    AuthSession::new(session)
        .set_delivery_man_id(delivery_man.id)
        .await?;

    let resolved = AuthGuard::new(db, session).require_delivery_man().await?;

    assert_eq!(resolved.id, delivery_man.id);

    Ok(())
}

/// Tests that a deactivated delivery-man is locked out of an existing session.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_deactivated_delivery_man() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let delivery_man = factory::delivery_man::DeliveryManFactory::new(db)
        .active(false)
        .build()
        .await?;
    AuthSession::new(session)
        .set_delivery_man_id(delivery_man.id)
        .await?;

    let result = AuthGuard::new(db, session).require_delivery_man().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
