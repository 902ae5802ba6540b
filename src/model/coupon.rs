use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CouponDto {
    pub id: i32,
    pub shop_id: i32,
    pub code: String,
    /// Discount percentage, 1 to 100.
    pub value: i32,
    pub min_amount: Option<i64>,
    pub max_amount: Option<i64>,
    pub product_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCouponDto {
    pub code: String,
    pub value: i32,
    pub min_amount: Option<i64>,
    pub max_amount: Option<i64>,
    pub product_id: Option<i32>,
}
