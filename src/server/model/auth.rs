//! Login and registration inputs. Passwords are plain text until hashed by
//! the auth service.

use crate::model::auth::{LoginDto, RegisterShopDto, RegisterUserDto};

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub avatar: Option<String>,
}

impl RegisterUserParams {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            phone_number: dto.phone_number,
            avatar: dto.avatar,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterShopParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub description: Option<String>,
    pub address: String,
    pub phone_number: String,
    pub zip_code: String,
    pub avatar: Option<String>,
}

impl RegisterShopParams {
    pub fn from_dto(dto: RegisterShopDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            description: dto.description,
            address: dto.address,
            phone_number: dto.phone_number,
            zip_code: dto.zip_code,
            avatar: dto.avatar,
        }
    }
}
