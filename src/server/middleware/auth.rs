use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{delivery_man::DeliveryManRepository, shop::ShopRepository, user::UserRepository},
    error::{
        auth::{AuthError, Principal},
        AppError,
    },
    middleware::session::AuthSession,
    model::{delivery_man::DeliveryMan, shop::Shop, user::User},
};

pub enum Permission {
    Admin,
}

/// Resolves the principal stored in the session and checks its permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::NotInSession)` - No user logged in
    /// - `Err(AuthError::NotInDatabase)` - Session user was deleted
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::NotInSession(Principal::User).into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::NotInDatabase(Principal::User, user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "admin role required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Requires a logged-in shop.
    pub async fn require_shop(&self) -> Result<Shop, AppError> {
        let Some(shop_id) = AuthSession::new(self.session).get_shop_id().await? else {
            return Err(AuthError::NotInSession(Principal::Shop).into());
        };

        let Some(shop) = ShopRepository::new(self.db).find_by_id(shop_id).await? else {
            return Err(AuthError::NotInDatabase(Principal::Shop, shop_id).into());
        };

        Ok(shop)
    }

    /// Requires a logged-in delivery-man whose account is still active.
    pub async fn require_delivery_man(&self) -> Result<DeliveryMan, AppError> {
        let Some(delivery_man_id) = AuthSession::new(self.session)
            .get_delivery_man_id()
            .await?
        else {
            return Err(AuthError::NotInSession(Principal::DeliveryMan).into());
        };

        let Some(delivery_man) = DeliveryManRepository::new(self.db)
            .find_by_id(delivery_man_id)
            .await?
        else {
            return Err(AuthError::NotInDatabase(Principal::DeliveryMan, delivery_man_id).into());
        };

        if !delivery_man.active {
            return Err(AuthError::AccessDenied(
                delivery_man_id,
                "delivery-man account is deactivated".to_string(),
            )
            .into());
        }

        Ok(delivery_man)
    }
}
