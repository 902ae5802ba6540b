//! Registration and login for users, shops and delivery-men.
//!
//! Services only verify credentials; storing the principal in the session is
//! the controller's job.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserRole,
    server::{
        data::{delivery_man::DeliveryManRepository, shop::ShopRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            auth::{Credentials, RegisterShopParams, RegisterUserParams},
            delivery_man::DeliveryMan,
            shop::{CreateShopParams, Shop},
            user::{CreateUserParams, User},
        },
        util::{
            password::{hash_password, validate_password, verify_password},
            validate::{normalize_email, require_non_empty},
        },
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a customer account with the `user` role.
    ///
    /// # Returns
    /// - `Ok(User)` - The new account
    /// - `Err(AppError::BadRequest)` - Empty name, invalid email or short password
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register_user(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let name = require_non_empty("Name", &params.name)?;
        let email = normalize_email(&params.email)?;
        validate_password(&params.password)?;

        let user = UserRepository::new(self.db)
            .create(CreateUserParams {
                name,
                email,
                password_hash: hash_password(&params.password)?,
                phone_number: params.phone_number,
                avatar: params.avatar,
                role: UserRole::User,
            })
            .await
            .map_err(|e| AppError::from_db_conflict(e, "Email is already registered"))?;

        tracing::info!("Registered user {}", user.id);

        Ok(user)
    }

    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login_user(&self, credentials: Credentials) -> Result<User, AppError> {
        let email = credentials.email.trim().to_lowercase();

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&credentials.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Creates a seller account with a zero balance.
    pub async fn register_shop(&self, params: RegisterShopParams) -> Result<Shop, AppError> {
        let name = require_non_empty("Shop name", &params.name)?;
        let email = normalize_email(&params.email)?;
        let address = require_non_empty("Address", &params.address)?;
        let phone_number = require_non_empty("Phone number", &params.phone_number)?;
        let zip_code = require_non_empty("Zip code", &params.zip_code)?;
        validate_password(&params.password)?;

        let shop = ShopRepository::new(self.db)
            .create(CreateShopParams {
                name,
                email,
                password_hash: hash_password(&params.password)?,
                description: params.description,
                address,
                phone_number,
                zip_code,
                avatar: params.avatar,
            })
            .await
            .map_err(|e| AppError::from_db_conflict(e, "Email is already registered"))?;

        tracing::info!("Registered shop {}", shop.id);

        Ok(shop)
    }

    pub async fn login_shop(&self, credentials: Credentials) -> Result<Shop, AppError> {
        let email = credentials.email.trim().to_lowercase();

        let Some(shop) = ShopRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&credentials.password, &shop.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(shop)
    }

    /// Deactivated delivery-men are rejected like a wrong password.
    pub async fn login_delivery_man(&self, credentials: Credentials) -> Result<DeliveryMan, AppError> {
        let email = credentials.email.trim().to_lowercase();

        let Some(delivery_man) = DeliveryManRepository::new(self.db)
            .find_by_email(&email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !delivery_man.active || !verify_password(&credentials.password, &delivery_man.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(delivery_man)
    }

    /// Creates the bootstrap admin account unless an admin already exists.
    ///
    /// An existing user with the same email is promoted instead.
    ///
    /// # Returns
    /// - `Ok(true)` - An admin was created or promoted
    /// - `Ok(false)` - An admin already existed
    pub async fn ensure_admin(&self, email: &str, password: &str) -> Result<bool, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.admin_exists().await? {
            return Ok(false);
        }

        let email = normalize_email(email)?;

        if let Some(existing) = user_repo.find_by_email(&email).await? {
            user_repo.set_role(existing.id, UserRole::Admin).await?;
            tracing::info!("Promoted existing user {} to admin", existing.id);
            return Ok(true);
        }

        validate_password(password)?;

        let admin = user_repo
            .create(CreateUserParams {
                name: "Administrator".to_string(),
                email,
                password_hash: hash_password(password)?,
                phone_number: None,
                avatar: None,
                role: UserRole::Admin,
            })
            .await?;

        tracing::info!("Created bootstrap admin {}", admin.id);

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn registration(email: &str) -> RegisterUserParams {
        RegisterUserParams {
            name: "Ada".to_string(),
            email: email.to_string(),
            password: "secret-pw".to_string(),
            phone_number: None,
            avatar: None,
        }
    }

    /// Tests registering and logging in with a differently cased email.
    ///
    /// Expected: Ok with the same user from both calls
    #[tokio::test]
    async fn registers_and_logs_in_user() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        let user = service.register_user(registration(" Ada@Example.com ")).await?;
        assert_eq!(user.email, "ada@example.com");

        let logged_in = service
            .login_user(Credentials {
                email: "ADA@example.com".to_string(),
                password: "secret-pw".to_string(),
            })
            .await?;

        assert_eq!(logged_in.id, user.id);

        Ok(())
    }

    /// Tests that a wrong password and an unknown email fail the same way.
    ///
    /// Expected: Err(AuthError::InvalidCredentials) for both
    #[tokio::test]
    async fn rejects_bad_credentials_uniformly() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        service.register_user(registration("ada@example.com")).await?;

        for (email, password) in [("ada@example.com", "wrong-pw"), ("nobody@example.com", "secret-pw")] {
            let result = service
                .login_user(Credentials {
                    email: email.to_string(),
                    password: password.to_string(),
                })
                .await;

            assert!(matches!(
                result,
                Err(AppError::AuthErr(AuthError::InvalidCredentials))
            ));
        }

        Ok(())
    }

    /// Tests registering the same email twice.
    ///
    /// Expected: Err(AppError::Conflict)
    #[tokio::test]
    async fn duplicate_email_is_conflict() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        service.register_user(registration("ada@example.com")).await?;

        let result = service.register_user(registration("ADA@example.com")).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));

        Ok(())
    }

    /// Tests the minimum password length.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn short_password_is_rejected() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let mut params = registration("ada@example.com");
        params.password = "12345".to_string();

        let result = AuthService::new(db).register_user(params).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests that a deactivated delivery-man cannot log in with a correct password.
    ///
    /// Expected: Err(AuthError::InvalidCredentials)
    #[tokio::test]
    async fn inactive_delivery_man_cannot_log_in() -> Result<(), AppError> {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let delivery_man = factory::delivery_man::DeliveryManFactory::new(db)
            .password_hash(hash_password("rider-pw")?)
            .active(false)
            .build()
            .await?;

        let result = AuthService::new(db)
            .login_delivery_man(Credentials {
                email: delivery_man.email,
                password: "rider-pw".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));

        Ok(())
    }

    /// Tests the bootstrap admin is created once.
    ///
    /// Expected: Ok(true) then Ok(false)
    #[tokio::test]
    async fn ensure_admin_runs_once() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);

        assert!(service.ensure_admin("root@example.com", "root-pw").await?);
        assert!(!service.ensure_admin("root@example.com", "root-pw").await?);

        let admin = UserRepository::new(db)
            .find_by_email("root@example.com")
            .await?
            .unwrap();
        assert!(admin.is_admin());

        Ok(())
    }
}
