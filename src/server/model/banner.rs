use chrono::{DateTime, Utc};

use crate::model::banner::{BannerDto, BannerFormDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    pub link: Option<String>,
    pub position: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Banner {
    pub fn from_entity(entity: entity::banner::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            image_url: entity.image_url,
            link: entity.link,
            position: entity.position,
            active: entity.active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BannerDto {
        BannerDto {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            link: self.link,
            position: self.position,
            active: self.active,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BannerParams {
    pub title: String,
    pub image_url: String,
    pub link: Option<String>,
    pub position: i32,
    pub active: bool,
}

impl BannerParams {
    pub fn from_dto(dto: BannerFormDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            image_url: dto.image_url.trim().to_string(),
            link: dto.link,
            position: dto.position,
            active: dto.active,
        }
    }
}
