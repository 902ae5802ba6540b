//! Shop data repositories: accounts, withdraw methods and the balance ledger.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::shop::{
    CreateShopParams, NewTransaction, Shop, ShopTransaction, UpdateShopParams, WithdrawMethod,
};

pub struct ShopRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShopRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new shop with a zero balance.
    ///
    /// # Returns
    /// - `Ok(Shop)` - The created shop
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, params: CreateShopParams) -> Result<Shop, DbErr> {
        let entity = entity::shop::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            description: ActiveValue::Set(params.description),
            address: ActiveValue::Set(params.address),
            phone_number: ActiveValue::Set(params.phone_number),
            zip_code: ActiveValue::Set(params.zip_code),
            avatar: ActiveValue::Set(params.avatar),
            available_balance: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Shop::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Shop>, DbErr> {
        let entity = entity::prelude::Shop::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Shop::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Shop>, DbErr> {
        let entity = entity::prelude::Shop::find()
            .filter(entity::shop::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Shop::from_entity))
    }

    /// Updates a shop's public profile fields.
    ///
    /// # Returns
    /// - `Ok(Some(Shop))` - Updated shop
    /// - `Ok(None)` - No shop with that ID
    pub async fn update(&self, params: UpdateShopParams) -> Result<Option<Shop>, DbErr> {
        let Some(existing) = entity::prelude::Shop::find_by_id(params.shop_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::shop::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.address = ActiveValue::Set(params.address);
        active.phone_number = ActiveValue::Set(params.phone_number);
        active.zip_code = ActiveValue::Set(params.zip_code);
        active.avatar = ActiveValue::Set(params.avatar);

        let entity = active.update(self.db).await?;

        Ok(Some(Shop::from_entity(entity)))
    }

    /// Adds `delta` (which may be negative) to the shop's available balance.
    ///
    /// Must run inside a transaction; the caller checks for overdraw.
    ///
    /// # Returns
    /// - `Ok(Some(balance))` - The new balance
    /// - `Ok(None)` - No shop with that ID
    pub async fn adjust_balance(&self, shop_id: i32, delta: i64) -> Result<Option<i64>, DbErr> {
        let Some(existing) = entity::prelude::Shop::find_by_id(shop_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let balance = existing.available_balance + delta;

        let mut active: entity::shop::ActiveModel = existing.into();
        active.available_balance = ActiveValue::Set(balance);
        active.update(self.db).await?;

        Ok(Some(balance))
    }

    /// Deletes a shop; products, events, coupons, orders and ledger rows cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Shop::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets all shops with pagination, newest first.
    ///
    /// # Returns
    /// - `Ok((shops, total))` - Shops for the requested page and total count
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Shop>, u64), DbErr> {
        let paginator = entity::prelude::Shop::find()
            .order_by_desc(entity::shop::Column::CreatedAt)
            .order_by_desc(entity::shop::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let shops = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Shop::from_entity)
            .collect();

        Ok((shops, total))
    }
}

pub struct WithdrawMethodRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WithdrawMethodRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_shop(&self, shop_id: i32) -> Result<Option<WithdrawMethod>, DbErr> {
        let entity = entity::prelude::ShopWithdrawMethod::find()
            .filter(entity::shop_withdraw_method::Column::ShopId.eq(shop_id))
            .one(self.db)
            .await?;

        Ok(entity.map(WithdrawMethod::from_entity))
    }

    /// Sets the shop's withdraw method, replacing any existing one.
    pub async fn upsert(&self, shop_id: i32, method: WithdrawMethod) -> Result<WithdrawMethod, DbErr> {
        let entity = entity::prelude::ShopWithdrawMethod::insert(
            entity::shop_withdraw_method::ActiveModel {
                shop_id: ActiveValue::Set(shop_id),
                bank_name: ActiveValue::Set(method.bank_name),
                bank_country: ActiveValue::Set(method.bank_country),
                bank_swift_code: ActiveValue::Set(method.bank_swift_code),
                account_number: ActiveValue::Set(method.account_number),
                account_holder_name: ActiveValue::Set(method.account_holder_name),
                bank_address: ActiveValue::Set(method.bank_address),
                ..Default::default()
            },
        )
        .on_conflict(
            OnConflict::column(entity::shop_withdraw_method::Column::ShopId)
                .update_columns([
                    entity::shop_withdraw_method::Column::BankName,
                    entity::shop_withdraw_method::Column::BankCountry,
                    entity::shop_withdraw_method::Column::BankSwiftCode,
                    entity::shop_withdraw_method::Column::AccountNumber,
                    entity::shop_withdraw_method::Column::AccountHolderName,
                    entity::shop_withdraw_method::Column::BankAddress,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(WithdrawMethod::from_entity(entity))
    }

    /// # Returns
    /// - `Ok(true)` - Method removed
    /// - `Ok(false)` - Shop had no withdraw method
    pub async fn delete(&self, shop_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ShopWithdrawMethod::delete_many()
            .filter(entity::shop_withdraw_method::Column::ShopId.eq(shop_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Append-only ledger of balance movements.
pub struct ShopTransactionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShopTransactionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, transaction: NewTransaction) -> Result<ShopTransaction, DbErr> {
        let entity = entity::shop_transaction::ActiveModel {
            shop_id: ActiveValue::Set(transaction.shop_id),
            withdraw_request_id: ActiveValue::Set(transaction.withdraw_request_id),
            order_id: ActiveValue::Set(transaction.order_id),
            kind: ActiveValue::Set(transaction.kind.as_str().to_string()),
            amount: ActiveValue::Set(transaction.amount),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ShopTransaction::from_entity(entity)?)
    }

    /// Gets a shop's ledger, newest first.
    pub async fn get_by_shop(&self, shop_id: i32) -> Result<Vec<ShopTransaction>, DbErr> {
        let entities = entity::prelude::ShopTransaction::find()
            .filter(entity::shop_transaction::Column::ShopId.eq(shop_id))
            .order_by_desc(entity::shop_transaction::Column::CreatedAt)
            .order_by_desc(entity::shop_transaction::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ShopTransaction::from_entity)
            .collect::<Result<Vec<_>, _>>()?)
    }
}
