use crate::server::{error::AppError, middleware::session::AuthSession};
use test_utils::builder::TestBuilder;

/// Tests that logging in replaces a session ID issued before authentication.
///
/// Expected: a new saved ID, the pre-login data and the user ID both present
#[tokio::test]
async fn login_cycles_session_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let session = test.session().await.unwrap();

    session.insert("cart:note", "ring the bell").await?;
    session.save().await?;
    let anonymous_id = session.id();
    assert!(anonymous_id.is_some());

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(7).await?;
    session.save().await?;

    assert!(session.id().is_some());
    assert_ne!(session.id(), anonymous_id);
    assert_eq!(auth_session.get_user_id().await?, Some(7));
    assert_eq!(
        session.get::<String>("cart:note").await?,
        Some("ring the bell".to_string())
    );

    Ok(())
}

/// Tests that each principal type gets a fresh ID at login.
///
/// Expected: the ID changes again when a shop logs into a user session
#[tokio::test]
async fn shop_login_cycles_session_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let session = test.session().await.unwrap();
    let auth_session = AuthSession::new(session);

    auth_session.set_user_id(7).await?;
    session.save().await?;
    let user_id = session.id();

    auth_session.set_shop_id(3).await?;
    session.save().await?;

    assert_ne!(session.id(), user_id);
    assert_eq!(auth_session.get_user_id().await?, Some(7));
    assert_eq!(auth_session.get_shop_id().await?, Some(3));

    Ok(())
}
