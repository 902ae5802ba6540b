use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub shop_id: i32,
    pub category_id: i32,
    pub subcategory_id: Option<i32>,
    pub name: String,
    pub description: String,
    pub tags: Option<String>,
    pub original_price: Option<i64>,
    pub discount_price: i64,
    pub stock: i32,
    pub sold_out: i32,
    pub images: Vec<String>,
    pub rating: f64,
    pub review_count: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductReviewDto {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDetailDto {
    pub product: ProductDto,
    pub reviews: Vec<ProductReviewDto>,
}

/// Create and update payload for a shop's product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductFormDto {
    pub category_id: i32,
    pub subcategory_id: Option<i32>,
    pub name: String,
    pub description: String,
    pub tags: Option<String>,
    pub original_price: Option<i64>,
    pub discount_price: i64,
    pub stock: i32,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub order_id: i32,
    pub rating: i32,
    pub comment: String,
}
