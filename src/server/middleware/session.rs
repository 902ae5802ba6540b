//! Type-safe session management wrappers.
//!
//! One session can hold a logged-in user, shop and delivery-man at the same
//! time, each under its own key. `AuthSession` is the only place those keys are
//! read or written.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_AUTH_SHOP_ID: &str = "auth:shop";
const SESSION_AUTH_DELIVERY_MAN_ID: &str = "auth:delivery_man";

/// Authentication session management.
///
/// Stores and retrieves the IDs of the authenticated principals.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the logged-in user's ID.
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.log_in(SESSION_AUTH_USER_ID, user_id).await
    }

    /// Retrieves the logged-in user's ID.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    pub async fn set_shop_id(&self, shop_id: i32) -> Result<(), AppError> {
        self.log_in(SESSION_AUTH_SHOP_ID, shop_id).await
    }

    pub async fn get_shop_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_SHOP_ID).await?)
    }

    pub async fn set_delivery_man_id(&self, delivery_man_id: i32) -> Result<(), AppError> {
        self.log_in(SESSION_AUTH_DELIVERY_MAN_ID, delivery_man_id).await
    }

    pub async fn get_delivery_man_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self
            .session
            .get::<i32>(SESSION_AUTH_DELIVERY_MAN_ID)
            .await?)
    }

    /// Issues a fresh session ID, keeping existing data, then stores the
    /// principal under `key`.
    async fn log_in(&self, key: &str, id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(key, id).await?;
        Ok(())
    }

    /// Clears all data from the session, logging every principal out.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
