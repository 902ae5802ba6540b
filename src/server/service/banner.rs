use sea_orm::DatabaseConnection;

use crate::server::{
    data::banner::BannerRepository,
    error::AppError,
    model::banner::{Banner, BannerParams},
    util::validate::require_non_empty,
};

pub struct BannerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BannerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_banner(&self, params: BannerParams) -> Result<Banner, AppError> {
        let params = validate(params)?;

        Ok(BannerRepository::new(self.db).create(params).await?)
    }

    pub async fn update_banner(&self, id: i32, params: BannerParams) -> Result<Banner, AppError> {
        let params = validate(params)?;

        BannerRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Banner not found".to_string()))
    }

    pub async fn delete_banner(&self, id: i32) -> Result<(), AppError> {
        if !BannerRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Banner not found".to_string()));
        }

        Ok(())
    }

    pub async fn list_all_banners(&self) -> Result<Vec<Banner>, AppError> {
        Ok(BannerRepository::new(self.db).get_all(false).await?)
    }

    /// Active banners ordered by position for the storefront carousel.
    pub async fn list_active_banners(&self) -> Result<Vec<Banner>, AppError> {
        Ok(BannerRepository::new(self.db).get_all(true).await?)
    }
}

fn validate(mut params: BannerParams) -> Result<BannerParams, AppError> {
    params.title = require_non_empty("Title", &params.title)?;
    params.image_url = require_non_empty("Image URL", &params.image_url)?;

    Ok(params)
}
