use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
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
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEventDto {
    pub category_id: i32,
    pub name: String,
    pub description: String,
    pub tags: Option<String>,
    pub original_price: Option<i64>,
    pub discount_price: i64,
    pub stock: i32,
    #[serde(default)]
    pub images: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub finish_date: DateTime<Utc>,
}
