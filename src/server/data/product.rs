//! Product and review repositories.
//!
//! Listing queries never return soft-deleted products; `find_by_id` does, so
//! callers that need a live product must check `Product::is_deleted`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::product::{
    CreateReviewParams, Product, ProductFilter, ProductParams, ProductReview,
};

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a product with no sales and no reviews.
    pub async fn create(&self, params: ProductParams) -> Result<Product, DbErr> {
        let entity = entity::product::ActiveModel {
            shop_id: ActiveValue::Set(params.shop_id),
            category_id: ActiveValue::Set(params.category_id),
            subcategory_id: ActiveValue::Set(params.subcategory_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            tags: ActiveValue::Set(params.tags),
            original_price: ActiveValue::Set(params.original_price),
            discount_price: ActiveValue::Set(params.discount_price),
            stock: ActiveValue::Set(params.stock),
            sold_out: ActiveValue::Set(0),
            images: ActiveValue::Set(serde_json::json!(params.images)),
            rating: ActiveValue::Set(0.0),
            review_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(entity)?)
    }

    /// Finds a product by ID, including soft-deleted ones.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let entity = entity::prelude::Product::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Product::from_entity).transpose()?)
    }

    /// Finds a live product owned by `shop_id`.
    pub async fn find_owned(&self, id: i32, shop_id: i32) -> Result<Option<Product>, DbErr> {
        let entity = entity::prelude::Product::find_by_id(id)
            .filter(entity::product::Column::ShopId.eq(shop_id))
            .filter(entity::product::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Product::from_entity).transpose()?)
    }

    /// Overwrites the editable fields of a product. Stock counters and ratings are kept.
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - Updated product
    /// - `Ok(None)` - No product with that ID
    pub async fn update(&self, id: i32, params: ProductParams) -> Result<Option<Product>, DbErr> {
        let Some(existing) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::product::ActiveModel = existing.into();
        active.category_id = ActiveValue::Set(params.category_id);
        active.subcategory_id = ActiveValue::Set(params.subcategory_id);
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.tags = ActiveValue::Set(params.tags);
        active.original_price = ActiveValue::Set(params.original_price);
        active.discount_price = ActiveValue::Set(params.discount_price);
        active.stock = ActiveValue::Set(params.stock);
        active.images = ActiveValue::Set(serde_json::json!(params.images));

        let entity = active.update(self.db).await?;

        Ok(Some(Product::from_entity(entity)?))
    }

    /// Marks a product deleted. Already-deleted products are left untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - Product newly marked deleted
    /// - `Ok(false)` - No live product with that ID
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::update_many()
            .filter(entity::product::Column::Id.eq(id))
            .filter(entity::product::Column::DeletedAt.is_null())
            .col_expr(
                entity::product::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Some(Utc::now())),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Moves `quantity` units between stock and sold count.
    ///
    /// A positive `quantity` sells (stock down, sold_out up); a negative one
    /// restores. Must run inside a transaction; the caller checks stock.
    pub async fn adjust_stock(&self, id: i32, quantity: i32) -> Result<Option<Product>, DbErr> {
        let Some(existing) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let stock = existing.stock - quantity;
        let sold_out = (existing.sold_out + quantity).max(0);

        let mut active: entity::product::ActiveModel = existing.into();
        active.stock = ActiveValue::Set(stock);
        active.sold_out = ActiveValue::Set(sold_out);

        let entity = active.update(self.db).await?;

        Ok(Some(Product::from_entity(entity)?))
    }

    /// Stores a recomputed average rating and review count.
    pub async fn set_rating(&self, id: i32, rating: f64, review_count: i32) -> Result<(), DbErr> {
        entity::prelude::Product::update_many()
            .filter(entity::product::Column::Id.eq(id))
            .col_expr(
                entity::product::Column::Rating,
                sea_orm::sea_query::Expr::value(rating),
            )
            .col_expr(
                entity::product::Column::ReviewCount,
                sea_orm::sea_query::Expr::value(review_count),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets live products matching every set filter, newest first.
    ///
    /// # Returns
    /// - `Ok((products, total))` - Products for the requested page and total matches
    pub async fn get_paginated(
        &self,
        filter: ProductFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Product>, u64), DbErr> {
        let mut query = entity::prelude::Product::find()
            .filter(entity::product::Column::DeletedAt.is_null());

        if let Some(category_id) = filter.category_id {
            query = query.filter(entity::product::Column::CategoryId.eq(category_id));
        }
        if let Some(subcategory_id) = filter.subcategory_id {
            query = query.filter(entity::product::Column::SubcategoryId.eq(subcategory_id));
        }
        if let Some(shop_id) = filter.shop_id {
            query = query.filter(entity::product::Column::ShopId.eq(shop_id));
        }
        // SQLite LIKE is case-insensitive for ASCII.
        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            query = query.filter(entity::product::Column::Name.contains(search));
        }

        let paginator = query
            .order_by_desc(entity::product::Column::CreatedAt)
            .order_by_desc(entity::product::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let products = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Product::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((products, total))
    }
}

pub struct ProductReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateReviewParams) -> Result<entity::product_review::Model, DbErr> {
        entity::product_review::ActiveModel {
            product_id: ActiveValue::Set(params.product_id),
            user_id: ActiveValue::Set(params.user_id),
            order_id: ActiveValue::Set(params.order_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a product's reviews with reviewer names, newest first.
    pub async fn get_by_product(&self, product_id: i32) -> Result<Vec<ProductReview>, DbErr> {
        let results = entity::prelude::ProductReview::find()
            .filter(entity::product_review::Column::ProductId.eq(product_id))
            .order_by_desc(entity::product_review::Column::CreatedAt)
            .order_by_desc(entity::product_review::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(review, user)| ProductReview::from_entity(review, user))
            .collect())
    }

    /// Mean rating and review count over every review of a product.
    pub async fn rating_summary(&self, product_id: i32) -> Result<(f64, i32), DbErr> {
        let reviews = entity::prelude::ProductReview::find()
            .filter(entity::product_review::Column::ProductId.eq(product_id))
            .all(self.db)
            .await?;

        if reviews.is_empty() {
            return Ok((0.0, 0));
        }

        let count = reviews.len() as i32;
        let sum: i32 = reviews.iter().map(|review| review.rating).sum();

        Ok((sum as f64 / count as f64, count))
    }
}
