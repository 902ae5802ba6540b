use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::UserRole,
    server::{
        data::{
            order::OrderRepository,
            user::{UserAddressRepository, UserRepository},
        },
        error::{auth::AuthError, AppError},
        model::{
            order::OrderFilter,
            pagination::Paginated,
            user::{UpdateProfileParams, UpsertAddressParams, User, UserAddress},
        },
        util::{
            password::{hash_password, validate_password, verify_password},
            validate::{require_non_empty, validate_page},
        },
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user with their saved addresses.
    pub async fn get_profile(&self, user_id: i32) -> Result<(User, Vec<UserAddress>), AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let addresses = UserAddressRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        Ok((user, addresses))
    }

    pub async fn update_profile(
        &self,
        mut params: UpdateProfileParams,
    ) -> Result<(User, Vec<UserAddress>), AppError> {
        params.name = require_non_empty("Name", &params.name)?;
        let user_id = params.user_id;

        if UserRepository::new(self.db)
            .update_profile(params)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        self.get_profile(user_id).await
    }

    /// Replaces a user's password after verifying the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AuthError::InvalidCredentials)` - `old_password` does not match
    /// - `Err(AppError::BadRequest)` - New password too short
    pub async fn change_password(
        &self,
        user_id: i32,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if !verify_password(old_password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        validate_password(new_password)?;

        repo.update_password_hash(user_id, hash_password(new_password)?)
            .await?;

        Ok(())
    }

    /// Saves an address, replacing the user's existing one of the same type.
    pub async fn upsert_address(
        &self,
        mut params: UpsertAddressParams,
    ) -> Result<Vec<UserAddress>, AppError> {
        params.address_type = require_non_empty("Address type", &params.address_type)?;
        params.address1 = require_non_empty("Address", &params.address1)?;
        let user_id = params.user_id;

        let txn = self.db.begin().await?;
        UserAddressRepository::new(&txn).upsert(params).await?;
        txn.commit().await?;

        Ok(UserAddressRepository::new(self.db)
            .get_by_user(user_id)
            .await?)
    }

    /// # Returns
    /// - `Ok(addresses)` - Remaining addresses of the user
    /// - `Err(AppError::NotFound)` - No such address owned by the user
    pub async fn delete_address(
        &self,
        user_id: i32,
        address_id: i32,
    ) -> Result<Vec<UserAddress>, AppError> {
        let repo = UserAddressRepository::new(self.db);

        if !repo.delete(user_id, address_id).await? {
            return Err(AppError::NotFound("Address not found".to_string()));
        }

        Ok(repo.get_by_user(user_id).await?)
    }

    pub async fn list_users(&self, page: u64, per_page: u64) -> Result<Paginated<User>, AppError> {
        validate_page(page, per_page)?;

        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(users, total, page, per_page))
    }

    /// Deletes another user's account. Admins cannot delete themselves.
    pub async fn delete_user(&self, admin_id: i32, user_id: i32) -> Result<(), AppError> {
        if admin_id == user_id {
            return Err(AppError::BadRequest(
                "Admins cannot delete their own account".to_string(),
            ));
        }

        let filter = OrderFilter {
            user_id: Some(user_id),
            ..Default::default()
        };
        if OrderRepository::new(self.db).count(filter).await? > 0 {
            return Err(AppError::Conflict(
                "User has order history and cannot be deleted".to_string(),
            ));
        }

        let deleted = UserRepository::new(self.db)
            .delete(user_id)
            .await
            .map_err(|e| {
                AppError::from_db_conflict(e, "User has order history and cannot be deleted")
            })?;
        if !deleted {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("Admin {} deleted user {}", admin_id, user_id);

        Ok(())
    }

    /// Changes another user's role. Admins cannot demote themselves.
    pub async fn set_role(&self, admin_id: i32, user_id: i32, role: UserRole) -> Result<(), AppError> {
        if admin_id == user_id && role != UserRole::Admin {
            return Err(AppError::BadRequest(
                "Admins cannot remove their own admin role".to_string(),
            ));
        }

        if !UserRepository::new(self.db).set_role(user_id, role).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("Admin {} set role of user {} to {}", admin_id, user_id, role.as_str());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests changing a password with the correct and a wrong current password.
    ///
    /// Expected: Err(InvalidCredentials) for the wrong one, Ok for the right one
    #[tokio::test]
    async fn change_password_requires_current_password() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::UserFactory::new(db)
            .password_hash(hash_password("old-password")?)
            .build()
            .await?;
        let service = UserService::new(db);

        let wrong = service
            .change_password(user.id, "not-it", "new-password")
            .await;
        assert!(matches!(
            wrong,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));

        service
            .change_password(user.id, "old-password", "new-password")
            .await?;

        let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
        assert!(verify_password("new-password", &stored.password_hash));

        Ok(())
    }

    /// Tests that an admin cannot delete or demote themself.
    ///
    /// Expected: Err(AppError::BadRequest) for both, the account unchanged
    #[tokio::test]
    async fn admin_cannot_remove_themself() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let admin = factory::user::create_admin(db).await?;
        let service = UserService::new(db);

        assert!(matches!(
            service.delete_user(admin.id, admin.id).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.set_role(admin.id, admin.id, UserRole::User).await,
            Err(AppError::BadRequest(_))
        ));

        let stored = UserRepository::new(db).find_by_id(admin.id).await?.unwrap();
        assert!(stored.is_admin());

        Ok(())
    }

    /// Tests an admin deleting another user.
    ///
    /// Expected: Ok, then NotFound on a second attempt
    #[tokio::test]
    async fn admin_deletes_other_user() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let admin = factory::user::create_admin(db).await?;
        let user = factory::create_user(db).await?;
        let service = UserService::new(db);

        service.delete_user(admin.id, user.id).await?;

        assert!(matches!(
            service.delete_user(admin.id, user.id).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }

    /// Tests deleting a customer who has a settled order.
    ///
    /// Expected: Err(AppError::Conflict), the user and their order kept
    #[tokio::test]
    async fn refuses_to_delete_user_with_orders() -> Result<(), AppError> {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let admin = factory::user::create_admin(db).await?;
        let user = factory::create_user(db).await?;
        let (shop, _category, product) =
            factory::helpers::create_product_with_dependencies(db).await?;
        factory::order::OrderFactory::new(db, user.id, shop.id)
            .item(product.id, 2000, 1)
            .status("Delivered")
            .settled_amount(1900)
            .build()
            .await?;

        let result = UserService::new(db).delete_user(admin.id, user.id).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert!(UserRepository::new(db).find_by_id(user.id).await?.is_some());
        let filter = OrderFilter {
            user_id: Some(user.id),
            ..Default::default()
        };
        assert_eq!(OrderRepository::new(db).count(filter).await?, 1);

        Ok(())
    }
}
