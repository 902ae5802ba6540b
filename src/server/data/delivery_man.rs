use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::delivery_man::{
    CreateDeliveryManParams, DeliveryMan, UpdateDeliveryManParams,
};

pub struct DeliveryManRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeliveryManRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an active delivery-man.
    pub async fn create(&self, params: CreateDeliveryManParams) -> Result<DeliveryMan, DbErr> {
        let entity = entity::delivery_man::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            phone_number: ActiveValue::Set(params.phone_number),
            vehicle: ActiveValue::Set(params.vehicle),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(DeliveryMan::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<DeliveryMan>, DbErr> {
        let entity = entity::prelude::DeliveryMan::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(DeliveryMan::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<DeliveryMan>, DbErr> {
        let entity = entity::prelude::DeliveryMan::find()
            .filter(entity::delivery_man::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(DeliveryMan::from_entity))
    }

    /// # Returns
    /// - `Ok(Some(DeliveryMan))` - Updated delivery-man
    /// - `Ok(None)` - No delivery-man with that ID
    pub async fn update(
        &self,
        params: UpdateDeliveryManParams,
    ) -> Result<Option<DeliveryMan>, DbErr> {
        let Some(existing) = entity::prelude::DeliveryMan::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::delivery_man::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.phone_number = ActiveValue::Set(params.phone_number);
        active.vehicle = ActiveValue::Set(params.vehicle);
        active.active = ActiveValue::Set(params.active);

        let entity = active.update(self.db).await?;

        Ok(Some(DeliveryMan::from_entity(entity)))
    }

    /// Deletes a delivery-man; orders they held keep a null assignment.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::DeliveryMan::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets all delivery-men with pagination, ordered by name.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<DeliveryMan>, u64), DbErr> {
        let paginator = entity::prelude::DeliveryMan::find()
            .order_by_asc(entity::delivery_man::Column::Name)
            .order_by_asc(entity::delivery_man::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let delivery_men = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(DeliveryMan::from_entity)
            .collect();

        Ok((delivery_men, total))
    }
}
