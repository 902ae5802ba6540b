//! User and address domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{UpdateProfileDto, UpsertAddressDto, UserAddressDto, UserDto, UserRole},
    server::error::internal::InternalError,
};

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(InternalError::UnknownStatus {
                kind: "user role",
                value: other.to_string(),
            }),
        }
    }
}

/// A customer or admin account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - Converted user
    /// - `Err(InternalError::UnknownStatus)` - Stored role is not recognised
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            phone_number: entity.phone_number,
            avatar: entity.avatar,
            role: UserRole::parse(&entity.role)?,
            created_at: entity.created_at,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Converts to a DTO, attaching the user's saved addresses.
    pub fn into_dto(self, addresses: Vec<UserAddress>) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            avatar: self.avatar,
            role: self.role,
            addresses: addresses.into_iter().map(UserAddress::into_dto).collect(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserAddress {
    pub id: i32,
    pub user_id: i32,
    pub address_type: String,
    pub country: String,
    pub city: String,
    pub address1: String,
    pub address2: Option<String>,
    pub zip_code: String,
}

impl UserAddress {
    pub fn from_entity(entity: entity::user_address::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            address_type: entity.address_type,
            country: entity.country,
            city: entity.city,
            address1: entity.address1,
            address2: entity.address2,
            zip_code: entity.zip_code,
        }
    }

    pub fn into_dto(self) -> UserAddressDto {
        UserAddressDto {
            id: self.id,
            address_type: self.address_type,
            country: self.country,
            city: self.city,
            address1: self.address1,
            address2: self.address2,
            zip_code: self.zip_code,
        }
    }
}

/// Fields for inserting a user row; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub avatar: Option<String>,
    pub role: UserRole,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileParams {
    pub user_id: i32,
    pub name: String,
    pub phone_number: Option<String>,
    pub avatar: Option<String>,
}

impl UpdateProfileParams {
    pub fn from_dto(user_id: i32, dto: UpdateProfileDto) -> Self {
        Self {
            user_id,
            name: dto.name,
            phone_number: dto.phone_number,
            avatar: dto.avatar,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertAddressParams {
    pub user_id: i32,
    pub address_type: String,
    pub country: String,
    pub city: String,
    pub address1: String,
    pub address2: Option<String>,
    pub zip_code: String,
}

impl UpsertAddressParams {
    pub fn from_dto(user_id: i32, dto: UpsertAddressDto) -> Self {
        Self {
            user_id,
            address_type: dto.address_type.trim().to_string(),
            country: dto.country,
            city: dto.city,
            address1: dto.address1,
            address2: dto.address2,
            zip_code: dto.zip_code,
        }
    }
}
