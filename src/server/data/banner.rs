use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::banner::{Banner, BannerParams};

pub struct BannerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BannerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: BannerParams) -> Result<Banner, DbErr> {
        let entity = entity::banner::ActiveModel {
            title: ActiveValue::Set(params.title),
            image_url: ActiveValue::Set(params.image_url),
            link: ActiveValue::Set(params.link),
            position: ActiveValue::Set(params.position),
            active: ActiveValue::Set(params.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Banner::from_entity(entity))
    }

    /// # Returns
    /// - `Ok(Some(Banner))` - Updated banner
    /// - `Ok(None)` - No banner with that ID
    pub async fn update(&self, id: i32, params: BannerParams) -> Result<Option<Banner>, DbErr> {
        let Some(existing) = entity::prelude::Banner::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::banner::ActiveModel = existing.into();
        active.title = ActiveValue::Set(params.title);
        active.image_url = ActiveValue::Set(params.image_url);
        active.link = ActiveValue::Set(params.link);
        active.position = ActiveValue::Set(params.position);
        active.active = ActiveValue::Set(params.active);

        let entity = active.update(self.db).await?;

        Ok(Some(Banner::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Banner::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets banners ordered by position, optionally only active ones.
    pub async fn get_all(&self, active_only: bool) -> Result<Vec<Banner>, DbErr> {
        let mut query = entity::prelude::Banner::find();

        if active_only {
            query = query.filter(entity::banner::Column::Active.eq(true));
        }

        let entities = query
            .order_by_asc(entity::banner::Column::Position)
            .order_by_asc(entity::banner::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Banner::from_entity).collect())
    }
}
