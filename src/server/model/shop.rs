//! Shop, withdraw method and balance ledger domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::shop::{ShopDto, ShopInfoDto, ShopTransactionDto, UpdateShopDto, WithdrawMethodDto},
    server::error::internal::InternalError,
};

/// A seller account.
#[derive(Debug, Clone, PartialEq)]
pub struct Shop {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub description: Option<String>,
    pub address: String,
    pub phone_number: String,
    pub zip_code: String,
    pub avatar: Option<String>,
    /// Settled earnings not yet withdrawn, in cents.
    pub available_balance: i64,
    pub created_at: DateTime<Utc>,
}

impl Shop {
    pub fn from_entity(entity: entity::shop::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            description: entity.description,
            address: entity.address,
            phone_number: entity.phone_number,
            zip_code: entity.zip_code,
            avatar: entity.avatar,
            available_balance: entity.available_balance,
            created_at: entity.created_at,
        }
    }

    /// Public storefront view without balance or email.
    pub fn into_info_dto(self) -> ShopInfoDto {
        ShopInfoDto {
            id: self.id,
            name: self.name,
            description: self.description,
            address: self.address,
            phone_number: self.phone_number,
            zip_code: self.zip_code,
            avatar: self.avatar,
            created_at: self.created_at,
        }
    }

    pub fn into_dto(self, withdraw_method: Option<WithdrawMethod>) -> ShopDto {
        ShopDto {
            id: self.id,
            name: self.name,
            email: self.email,
            description: self.description,
            address: self.address,
            phone_number: self.phone_number,
            zip_code: self.zip_code,
            avatar: self.avatar,
            available_balance: self.available_balance,
            withdraw_method: withdraw_method.map(WithdrawMethod::into_dto),
            created_at: self.created_at,
        }
    }
}

/// Fields for inserting a shop row; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateShopParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub description: Option<String>,
    pub address: String,
    pub phone_number: String,
    pub zip_code: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateShopParams {
    pub shop_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub phone_number: String,
    pub zip_code: String,
    pub avatar: Option<String>,
}

impl UpdateShopParams {
    pub fn from_dto(shop_id: i32, dto: UpdateShopDto) -> Self {
        Self {
            shop_id,
            name: dto.name,
            description: dto.description,
            address: dto.address,
            phone_number: dto.phone_number,
            zip_code: dto.zip_code,
            avatar: dto.avatar,
        }
    }
}

/// Bank account a shop is paid out to.
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawMethod {
    pub bank_name: String,
    pub bank_country: String,
    pub bank_swift_code: String,
    pub account_number: String,
    pub account_holder_name: String,
    pub bank_address: String,
}

impl WithdrawMethod {
    pub fn from_entity(entity: entity::shop_withdraw_method::Model) -> Self {
        Self {
            bank_name: entity.bank_name,
            bank_country: entity.bank_country,
            bank_swift_code: entity.bank_swift_code,
            account_number: entity.account_number,
            account_holder_name: entity.account_holder_name,
            bank_address: entity.bank_address,
        }
    }

    pub fn from_dto(dto: WithdrawMethodDto) -> Self {
        Self {
            bank_name: dto.bank_name,
            bank_country: dto.bank_country,
            bank_swift_code: dto.bank_swift_code,
            account_number: dto.account_number,
            account_holder_name: dto.account_holder_name,
            bank_address: dto.bank_address,
        }
    }

    pub fn into_dto(self) -> WithdrawMethodDto {
        WithdrawMethodDto {
            bank_name: self.bank_name,
            bank_country: self.bank_country,
            bank_swift_code: self.bank_swift_code,
            account_number: self.account_number,
            account_holder_name: self.account_holder_name,
            bank_address: self.bank_address,
        }
    }
}

/// Why a shop's balance moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Credit for a delivered order, net of service charge.
    OrderSettlement,
    /// Debit that claws back a settlement when a refund is approved.
    Refund,
    /// Debit for a payout request, or the matching credit when it is rejected.
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrderSettlement => "order_settlement",
            Self::Refund => "refund",
            Self::Withdrawal => "withdrawal",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "order_settlement" => Ok(Self::OrderSettlement),
            "refund" => Ok(Self::Refund),
            "withdrawal" => Ok(Self::Withdrawal),
            other => Err(InternalError::UnknownStatus {
                kind: "transaction kind",
                value: other.to_string(),
            }),
        }
    }
}

/// One signed movement of a shop's balance.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopTransaction {
    pub id: i32,
    pub shop_id: i32,
    pub withdraw_request_id: Option<i32>,
    pub order_id: Option<i32>,
    pub kind: TransactionKind,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

impl ShopTransaction {
    pub fn from_entity(entity: entity::shop_transaction::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            shop_id: entity.shop_id,
            withdraw_request_id: entity.withdraw_request_id,
            order_id: entity.order_id,
            kind: TransactionKind::parse(&entity.kind)?,
            amount: entity.amount,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ShopTransactionDto {
        ShopTransactionDto {
            id: self.id,
            kind: self.kind.as_str().to_string(),
            amount: self.amount,
            order_id: self.order_id,
            withdraw_request_id: self.withdraw_request_id,
            created_at: self.created_at,
        }
    }
}

/// A balance movement to record; the amount is signed.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub shop_id: i32,
    pub kind: TransactionKind,
    pub amount: i64,
    pub order_id: Option<i32>,
    pub withdraw_request_id: Option<i32>,
}
