use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::withdraw::WithdrawStatus, server::model::withdraw::WithdrawRequest};

pub struct WithdrawRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WithdrawRequestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a `processing` request. The balance debit is the caller's job.
    pub async fn create(&self, shop_id: i32, amount: i64) -> Result<WithdrawRequest, DbErr> {
        let now = Utc::now();

        let entity = entity::withdraw_request::ActiveModel {
            shop_id: ActiveValue::Set(shop_id),
            amount: ActiveValue::Set(amount),
            status: ActiveValue::Set(WithdrawStatus::Processing.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(WithdrawRequest::from_entity(entity)?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<WithdrawRequest>, DbErr> {
        let entity = entity::prelude::WithdrawRequest::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(WithdrawRequest::from_entity).transpose()?)
    }

    /// Moves a request to `status` only if it is still `processing`.
    ///
    /// # Returns
    /// - `Ok(true)` - Status changed
    /// - `Ok(false)` - Request missing or already finalised
    pub async fn finalise(&self, id: i32, status: WithdrawStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::WithdrawRequest::update_many()
            .filter(entity::withdraw_request::Column::Id.eq(id))
            .filter(
                entity::withdraw_request::Column::Status.eq(WithdrawStatus::Processing.as_str()),
            )
            .col_expr(
                entity::withdraw_request::Column::Status,
                sea_orm::sea_query::Expr::value(status.as_str()),
            )
            .col_expr(
                entity::withdraw_request::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets a shop's requests, newest first.
    pub async fn get_by_shop(&self, shop_id: i32) -> Result<Vec<WithdrawRequest>, DbErr> {
        let entities = entity::prelude::WithdrawRequest::find()
            .filter(entity::withdraw_request::Column::ShopId.eq(shop_id))
            .order_by_desc(entity::withdraw_request::Column::CreatedAt)
            .order_by_desc(entity::withdraw_request::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(WithdrawRequest::from_entity)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Gets every request with pagination, newest first, optionally by status.
    pub async fn get_all_paginated(
        &self,
        status: Option<WithdrawStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<WithdrawRequest>, u64), DbErr> {
        let mut query = entity::prelude::WithdrawRequest::find();

        if let Some(status) = status {
            query = query.filter(entity::withdraw_request::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::withdraw_request::Column::CreatedAt)
            .order_by_desc(entity::withdraw_request::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let requests = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(WithdrawRequest::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((requests, total))
    }
}
