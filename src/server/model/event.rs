use chrono::{DateTime, Utc};

use crate::{
    model::event::{CreateEventDto, EventDto},
    server::{error::internal::InternalError, model::product::images_from_json},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Running,
    Ended,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Ended => "ended",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "running" => Ok(Self::Running),
            "ended" => Ok(Self::Ended),
            other => Err(InternalError::UnknownStatus {
                kind: "event status",
                value: other.to_string(),
            }),
        }
    }
}

/// A time-boxed promotional listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub shop_id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: String,
    pub tags: Option<String>,
    pub original_price: Option<i64>,
    pub discount_price: i64,
    pub stock: i32,
    pub sold_out: i32,
    pub images: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub finish_date: DateTime<Utc>,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Result<Self, InternalError> {
        Ok(Self {
            images: images_from_json("event", entity.id, entity.images)?,
            status: EventStatus::parse(&entity.status)?,
            id: entity.id,
            shop_id: entity.shop_id,
            category_id: entity.category_id,
            name: entity.name,
            description: entity.description,
            tags: entity.tags,
            original_price: entity.original_price,
            discount_price: entity.discount_price,
            stock: entity.stock,
            sold_out: entity.sold_out,
            start_date: entity.start_date,
            finish_date: entity.finish_date,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            shop_id: self.shop_id,
            category_id: self.category_id,
            name: self.name,
            description: self.description,
            tags: self.tags,
            original_price: self.original_price,
            discount_price: self.discount_price,
            stock: self.stock,
            sold_out: self.sold_out,
            images: self.images,
            start_date: self.start_date,
            finish_date: self.finish_date,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub shop_id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: String,
    pub tags: Option<String>,
    pub original_price: Option<i64>,
    pub discount_price: i64,
    pub stock: i32,
    pub images: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub finish_date: DateTime<Utc>,
}

impl CreateEventParams {
    pub fn from_dto(shop_id: i32, dto: CreateEventDto) -> Self {
        Self {
            shop_id,
            category_id: dto.category_id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            tags: dto.tags,
            original_price: dto.original_price,
            discount_price: dto.discount_price,
            stock: dto.stock,
            images: dto.images,
            start_date: dto.start_date,
            finish_date: dto.finish_date,
        }
    }
}
