use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::coupon::{Coupon, CreateCouponParams};

pub struct CouponRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CouponRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(Coupon)` - Created coupon
    /// - `Err(DbErr)` - Database error, including a unique violation on code
    pub async fn create(&self, params: CreateCouponParams) -> Result<Coupon, DbErr> {
        let entity = entity::coupon::ActiveModel {
            shop_id: ActiveValue::Set(params.shop_id),
            code: ActiveValue::Set(params.code),
            value: ActiveValue::Set(params.value),
            min_amount: ActiveValue::Set(params.min_amount),
            max_amount: ActiveValue::Set(params.max_amount),
            product_id: ActiveValue::Set(params.product_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Coupon::from_entity(entity))
    }

    /// Finds a coupon by exact (case-sensitive) code.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, DbErr> {
        let entity = entity::prelude::Coupon::find()
            .filter(entity::coupon::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Coupon::from_entity))
    }

    pub async fn get_by_shop(&self, shop_id: i32) -> Result<Vec<Coupon>, DbErr> {
        let entities = entity::prelude::Coupon::find()
            .filter(entity::coupon::Column::ShopId.eq(shop_id))
            .order_by_desc(entity::coupon::Column::CreatedAt)
            .order_by_desc(entity::coupon::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Coupon::from_entity).collect())
    }

    /// Deletes a coupon only if it belongs to `shop_id`.
    pub async fn delete_owned(&self, id: i32, shop_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Coupon::delete_many()
            .filter(entity::coupon::Column::Id.eq(id))
            .filter(entity::coupon::Column::ShopId.eq(shop_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
