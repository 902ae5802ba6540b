use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::event::{CreateEventParams, Event, EventStatus};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an event in the `running` status.
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            shop_id: ActiveValue::Set(params.shop_id),
            category_id: ActiveValue::Set(params.category_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            tags: ActiveValue::Set(params.tags),
            original_price: ActiveValue::Set(params.original_price),
            discount_price: ActiveValue::Set(params.discount_price),
            stock: ActiveValue::Set(params.stock),
            sold_out: ActiveValue::Set(0),
            images: ActiveValue::Set(serde_json::json!(params.images)),
            start_date: ActiveValue::Set(params.start_date),
            finish_date: ActiveValue::Set(params.finish_date),
            status: ActiveValue::Set(EventStatus::Running.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity)?)
    }

    /// Deletes an event only if it belongs to `shop_id`.
    pub async fn delete_owned(&self, id: i32, shop_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_many()
            .filter(entity::event::Column::Id.eq(id))
            .filter(entity::event::Column::ShopId.eq(shop_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets all of a shop's events, newest first.
    pub async fn get_by_shop(&self, shop_id: i32) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::ShopId.eq(shop_id))
            .order_by_desc(entity::event::Column::CreatedAt)
            .order_by_desc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Event::from_entity)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Gets events that are `running` with `start_date <= now < finish_date`,
    /// soonest-ending first.
    pub async fn get_running(&self, now: DateTime<Utc>) -> Result<Vec<Event>, DbErr> {
        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::Status.eq(EventStatus::Running.as_str()))
            .filter(entity::event::Column::StartDate.lte(now))
            .filter(entity::event::Column::FinishDate.gt(now))
            .order_by_asc(entity::event::Column::FinishDate)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Event::from_entity)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Gets every event with pagination, newest first.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Event>, u64), DbErr> {
        let paginator = entity::prelude::Event::find()
            .order_by_desc(entity::event::Column::CreatedAt)
            .order_by_desc(entity::event::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let events = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((events, total))
    }

    /// Flips running events whose `finish_date <= now` to `ended`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of events ended
    pub async fn end_finished(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Event::update_many()
            .filter(entity::event::Column::Status.eq(EventStatus::Running.as_str()))
            .filter(entity::event::Column::FinishDate.lte(now))
            .col_expr(
                entity::event::Column::Status,
                sea_orm::sea_query::Expr::value(EventStatus::Ended.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
