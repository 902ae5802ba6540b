use chrono::{DateTime, Utc};

use crate::model::delivery_man::{CreateDeliveryManDto, DeliveryManDto, UpdateDeliveryManDto};

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryMan {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: String,
    pub vehicle: Option<String>,
    /// Inactive delivery-men cannot log in or be assigned orders.
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl DeliveryMan {
    pub fn from_entity(entity: entity::delivery_man::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            phone_number: entity.phone_number,
            vehicle: entity.vehicle,
            active: entity.active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> DeliveryManDto {
        DeliveryManDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            vehicle: self.vehicle,
            active: self.active,
            created_at: self.created_at,
        }
    }
}

/// Fields for inserting a delivery-man row; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateDeliveryManParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: String,
    pub vehicle: Option<String>,
}

/// Account details entered by an admin; the password is still plain text.
#[derive(Debug, Clone)]
pub struct RegisterDeliveryManParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub vehicle: Option<String>,
}

impl RegisterDeliveryManParams {
    pub fn from_dto(dto: CreateDeliveryManDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            phone_number: dto.phone_number,
            vehicle: dto.vehicle,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateDeliveryManParams {
    pub id: i32,
    pub name: String,
    pub phone_number: String,
    pub vehicle: Option<String>,
    pub active: bool,
}

impl UpdateDeliveryManParams {
    pub fn from_dto(id: i32, dto: UpdateDeliveryManDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            phone_number: dto.phone_number,
            vehicle: dto.vehicle,
            active: dto.active,
        }
    }
}
