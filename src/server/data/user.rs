//! User data repository for database operations.
//!
//! Provides `UserRepository` for account rows and `UserAddressRepository` for the
//! per-type saved shipping addresses.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::user::UserRole,
    server::model::user::{CreateUserParams, UpdateProfileParams, UpsertAddressParams, User, UserAddress},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to run queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            phone_number: ActiveValue::Set(params.phone_number),
            avatar: ActiveValue::Set(params.avatar),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity)?)
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity).transpose()?)
    }

    /// Finds a user by normalized email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity).transpose()?)
    }

    /// Updates name, phone number and avatar.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(params.user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.phone_number = ActiveValue::Set(params.phone_number);
        active.avatar = ActiveValue::Set(params.avatar);

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)?))
    }

    /// Replaces the stored password hash.
    pub async fn update_password_hash(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets a user's role.
    ///
    /// # Returns
    /// - `Ok(true)` - Role updated
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_role(&self, id: i32, role: UserRole) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::Role,
                sea_orm::sea_query::Expr::value(role.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a user; addresses, orders and reviews cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets all users with pagination, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .order_by_desc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    /// Checks if any admin users exist in the database.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }
}

/// Repository for a user's saved addresses, at most one per `address_type`.
pub struct UserAddressRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserAddressRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all addresses of a user ordered by type.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<UserAddress>, DbErr> {
        let entities = entity::prelude::UserAddress::find()
            .filter(entity::user_address::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_address::Column::AddressType)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UserAddress::from_entity).collect())
    }

    /// Inserts an address or replaces the user's existing one of the same type.
    ///
    /// Run inside a transaction so the lookup and write see the same row.
    pub async fn upsert(&self, params: UpsertAddressParams) -> Result<UserAddress, DbErr> {
        let existing = entity::prelude::UserAddress::find()
            .filter(entity::user_address::Column::UserId.eq(params.user_id))
            .filter(entity::user_address::Column::AddressType.eq(&params.address_type))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(existing) => {
                let mut active: entity::user_address::ActiveModel = existing.into();
                active.country = ActiveValue::Set(params.country);
                active.city = ActiveValue::Set(params.city);
                active.address1 = ActiveValue::Set(params.address1);
                active.address2 = ActiveValue::Set(params.address2);
                active.zip_code = ActiveValue::Set(params.zip_code);
                active.update(self.db).await?
            }
            None => {
                entity::user_address::ActiveModel {
                    user_id: ActiveValue::Set(params.user_id),
                    address_type: ActiveValue::Set(params.address_type),
                    country: ActiveValue::Set(params.country),
                    city: ActiveValue::Set(params.city),
                    address1: ActiveValue::Set(params.address1),
                    address2: ActiveValue::Set(params.address2),
                    zip_code: ActiveValue::Set(params.zip_code),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(UserAddress::from_entity(entity))
    }

    /// Deletes an address only if it belongs to `user_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Address deleted
    /// - `Ok(false)` - No such address for this user
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserAddress::delete_many()
            .filter(entity::user_address::Column::Id.eq(id))
            .filter(entity::user_address::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
