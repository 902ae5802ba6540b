use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public storefront view of a shop. Carries no balance or email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShopInfoDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub phone_number: String,
    pub zip_code: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The signed-in seller's own view of their shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShopDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub description: Option<String>,
    pub address: String,
    pub phone_number: String,
    pub zip_code: String,
    pub avatar: Option<String>,
    pub available_balance: i64,
    pub withdraw_method: Option<WithdrawMethodDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateShopDto {
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub phone_number: String,
    pub zip_code: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WithdrawMethodDto {
    pub bank_name: String,
    pub bank_country: String,
    pub bank_swift_code: String,
    pub account_number: String,
    pub account_holder_name: String,
    pub bank_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShopTransactionDto {
    pub id: i32,
    pub kind: String,
    pub amount: i64,
    pub order_id: Option<i32>,
    pub withdraw_request_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}
