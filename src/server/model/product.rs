//! Product and review domain models.
//!
//! Products are soft-deleted: a set `deleted_at` hides them from every listing
//! and from ordering, while historical order lines keep pointing at them.

use chrono::{DateTime, Utc};

use crate::{
    model::product::{CreateReviewDto, ProductDto, ProductFormDto, ProductReviewDto},
    server::error::internal::InternalError,
};

/// Decodes the JSON image list stored on products and events.
pub fn images_from_json(
    entity: &'static str,
    id: i32,
    images: serde_json::Value,
) -> Result<Vec<String>, InternalError> {
    serde_json::from_value(images).map_err(|source| InternalError::MalformedImages {
        entity,
        id,
        source,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub shop_id: i32,
    pub category_id: i32,
    pub subcategory_id: Option<i32>,
    pub name: String,
    pub description: String,
    pub tags: Option<String>,
    pub original_price: Option<i64>,
    /// Selling price in cents.
    pub discount_price: i64,
    pub stock: i32,
    pub sold_out: i32,
    pub images: Vec<String>,
    pub rating: f64,
    pub review_count: i32,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Result<Self, InternalError> {
        Ok(Self {
            images: images_from_json("product", entity.id, entity.images)?,
            id: entity.id,
            shop_id: entity.shop_id,
            category_id: entity.category_id,
            subcategory_id: entity.subcategory_id,
            name: entity.name,
            description: entity.description,
            tags: entity.tags,
            original_price: entity.original_price,
            discount_price: entity.discount_price,
            stock: entity.stock,
            sold_out: entity.sold_out,
            rating: entity.rating,
            review_count: entity.review_count,
            created_at: entity.created_at,
            deleted_at: entity.deleted_at,
        })
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            shop_id: self.shop_id,
            category_id: self.category_id,
            subcategory_id: self.subcategory_id,
            name: self.name,
            description: self.description,
            tags: self.tags,
            original_price: self.original_price,
            discount_price: self.discount_price,
            stock: self.stock,
            sold_out: self.sold_out,
            images: self.images,
            rating: self.rating,
            review_count: self.review_count,
            created_at: self.created_at,
        }
    }
}

/// Create or update fields for a product owned by `shop_id`.
#[derive(Debug, Clone)]
pub struct ProductParams {
    pub shop_id: i32,
    pub category_id: i32,
    pub subcategory_id: Option<i32>,
    pub name: String,
    pub description: String,
    pub tags: Option<String>,
    pub original_price: Option<i64>,
    pub discount_price: i64,
    pub stock: i32,
    pub images: Vec<String>,
}

impl ProductParams {
    pub fn from_dto(shop_id: i32, dto: ProductFormDto) -> Self {
        Self {
            shop_id,
            category_id: dto.category_id,
            subcategory_id: dto.subcategory_id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            tags: dto.tags,
            original_price: dto.original_price,
            discount_price: dto.discount_price,
            stock: dto.stock,
            images: dto.images,
        }
    }
}

/// Optional filters for the public product listing. All set filters must match.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_id: Option<i32>,
    pub subcategory_id: Option<i32>,
    pub shop_id: Option<i32>,
    /// Case-insensitive substring of the product name.
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductReview {
    pub id: i32,
    pub product_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub order_id: i32,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl ProductReview {
    /// Builds a review, taking the reviewer's display name from the joined user.
    pub fn from_entity(
        entity: entity::product_review::Model,
        user: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            user_id: entity.user_id,
            user_name: user
                .map(|u| u.name)
                .unwrap_or_else(|| "Deleted user".to_string()),
            order_id: entity.order_id,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ProductReviewDto {
        ProductReviewDto {
            id: self.id,
            user_id: self.user_id,
            user_name: self.user_name,
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub user_id: i32,
    pub product_id: i32,
    pub order_id: i32,
    pub rating: i32,
    pub comment: String,
}

impl CreateReviewParams {
    pub fn from_dto(user_id: i32, product_id: i32, dto: CreateReviewDto) -> Self {
        Self {
            user_id,
            product_id,
            order_id: dto.order_id,
            rating: dto.rating,
            comment: dto.comment,
        }
    }
}
