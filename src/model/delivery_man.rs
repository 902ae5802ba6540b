use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeliveryManDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub vehicle: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDeliveryManDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub vehicle: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateDeliveryManDto {
    pub name: String,
    pub phone_number: String,
    pub vehicle: Option<String>,
    pub active: bool,
}
