use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::AppError,
    model::{
        event::{CreateEventParams, Event},
        pagination::Paginated,
    },
    service::product::ensure_category,
    util::validate::{require_non_empty, validate_page, validate_pricing},
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a running event for a shop.
    ///
    /// # Returns
    /// - `Ok(Event)` - Created event
    /// - `Err(AppError::BadRequest)` - Empty name, bad pricing, unknown category
    ///   or a finish date not after the start date
    pub async fn create_event(&self, mut params: CreateEventParams) -> Result<Event, AppError> {
        params.name = require_non_empty("Event name", &params.name)?;
        validate_pricing(params.original_price, params.discount_price, params.stock)?;

        if params.finish_date <= params.start_date {
            return Err(AppError::BadRequest(
                "Finish date must be after the start date".to_string(),
            ));
        }

        ensure_category(self.db, params.category_id, None).await?;

        Ok(EventRepository::new(self.db).create(params).await?)
    }

    pub async fn delete_event(&self, id: i32, shop_id: i32) -> Result<(), AppError> {
        if !EventRepository::new(self.db).delete_owned(id, shop_id).await? {
            return Err(AppError::NotFound("Event not found".to_string()));
        }

        Ok(())
    }

    pub async fn list_shop_events(&self, shop_id: i32) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).get_by_shop(shop_id).await?)
    }

    /// Events currently on show, soonest to finish first.
    pub async fn list_running_events(&self) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).get_running(Utc::now()).await?)
    }

    pub async fn list_all_events(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Event>, AppError> {
        validate_page(page, per_page)?;

        let (events, total) = EventRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(Paginated::new(events, total, page, per_page))
    }

    /// Marks every running event whose finish date has passed as ended.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of events ended
    pub async fn end_finished(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        Ok(EventRepository::new(self.db).end_finished(now).await?)
    }
}
