use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::order::OrderStatus,
    server::{
        data::{
            category::CategoryRepository,
            order::OrderRepository,
            product::{ProductRepository, ProductReviewRepository},
        },
        error::AppError,
        model::{
            pagination::Paginated,
            product::{CreateReviewParams, Product, ProductFilter, ProductParams, ProductReview},
        },
        util::validate::{require_non_empty, validate_page, validate_pricing},
    },
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists live products matching `filter`, newest first.
    pub async fn list_products(
        &self,
        filter: ProductFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Product>, AppError> {
        validate_page(page, per_page)?;

        let (products, total) = ProductRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;

        Ok(Paginated::new(products, total, page, per_page))
    }

    /// Gets a live product with its reviews, newest first.
    pub async fn get_product(&self, id: i32) -> Result<(Product, Vec<ProductReview>), AppError> {
        let product = ProductRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|product| !product.is_deleted())
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        let reviews = ProductReviewRepository::new(self.db)
            .get_by_product(id)
            .await?;

        Ok((product, reviews))
    }

    pub async fn create_product(&self, params: ProductParams) -> Result<Product, AppError> {
        let params = self.validate(params).await?;

        Ok(ProductRepository::new(self.db).create(params).await?)
    }

    /// Replaces a product's listing fields.
    ///
    /// # Returns
    /// - `Ok(Product)` - Updated product
    /// - `Err(AppError::NotFound)` - No live product with that ID in the shop
    pub async fn update_product(&self, id: i32, params: ProductParams) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);

        if repo.find_owned(id, params.shop_id).await?.is_none() {
            return Err(AppError::NotFound("Product not found".to_string()));
        }

        let params = self.validate(params).await?;

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    /// Hides a product from listings; existing order lines keep their snapshot.
    pub async fn delete_product(&self, id: i32, shop_id: i32) -> Result<(), AppError> {
        let repo = ProductRepository::new(self.db);

        if repo.find_owned(id, shop_id).await?.is_none() {
            return Err(AppError::NotFound("Product not found".to_string()));
        }

        repo.soft_delete(id).await?;

        Ok(())
    }

    /// Reviews a product bought in a delivered order and refreshes its rating.
    ///
    /// The order line is marked reviewed so each purchase is reviewed once.
    ///
    /// # Returns
    /// - `Ok(Product)` - The product with its recomputed rating
    /// - `Err(AppError::NotFound)` - Order not owned by the user, or unknown product
    /// - `Err(AppError::BadRequest)` - Rating out of range, order not delivered,
    ///   product not in the order or already reviewed
    pub async fn create_review(&self, mut params: CreateReviewParams) -> Result<Product, AppError> {
        if !(1..=5).contains(&params.rating) {
            return Err(AppError::BadRequest(
                "Rating must be between 1 and 5".to_string(),
            ));
        }
        params.comment = params.comment.trim().to_string();

        let txn = self.db.begin().await?;
        let orders = OrderRepository::new(&txn);

        let order = orders
            .find_by_id(params.order_id)
            .await?
            .filter(|order| order.user_id == params.user_id)
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        if order.status != OrderStatus::Delivered {
            return Err(AppError::BadRequest(
                "Only delivered orders can be reviewed".to_string(),
            ));
        }

        let Some(item) = orders
            .find_item(params.order_id, params.product_id)
            .await?
        else {
            return Err(AppError::BadRequest(
                "Product is not part of this order".to_string(),
            ));
        };

        if !orders.mark_item_reviewed(item.id).await? {
            return Err(AppError::BadRequest(
                "Product has already been reviewed for this order".to_string(),
            ));
        }

        let product_id = params.product_id;
        let reviews = ProductReviewRepository::new(&txn);
        reviews.create(params).await?;

        let (rating, review_count) = reviews.rating_summary(product_id).await?;
        let products = ProductRepository::new(&txn);
        products.set_rating(product_id, rating, review_count).await?;

        let product = products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        txn.commit().await?;

        Ok(product)
    }

    async fn validate(&self, mut params: ProductParams) -> Result<ProductParams, AppError> {
        params.name = require_non_empty("Product name", &params.name)?;
        validate_pricing(params.original_price, params.discount_price, params.stock)?;
        ensure_category(self.db, params.category_id, params.subcategory_id).await?;

        Ok(params)
    }
}

/// Checks that a category exists and, when given, that the subcategory is one of its own.
pub(crate) async fn ensure_category<C: ConnectionTrait>(
    db: &C,
    category_id: i32,
    subcategory_id: Option<i32>,
) -> Result<(), AppError> {
    let repo = CategoryRepository::new(db);

    if repo.find_by_id(category_id).await?.is_none() {
        return Err(AppError::BadRequest("Category does not exist".to_string()));
    }

    if let Some(subcategory_id) = subcategory_id {
        let belongs = repo
            .find_subcategory(subcategory_id)
            .await?
            .is_some_and(|sub| sub.category_id == category_id);

        if !belongs {
            return Err(AppError::BadRequest(
                "Subcategory does not belong to the category".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn params(shop_id: i32, category_id: i32) -> ProductParams {
        ProductParams {
            shop_id,
            category_id,
            subcategory_id: None,
            name: "Green Apples".to_string(),
            description: "Crisp".to_string(),
            tags: None,
            original_price: Some(500),
            discount_price: 400,
            stock: 20,
            images: vec!["https://cdn.example.com/apples.jpg".to_string()],
        }
    }

    /// Tests creating a product under a subcategory of another category.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn rejects_foreign_subcategory() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let shop = factory::create_shop(db).await?;
        let fruit = factory::create_category(db).await?;
        let dairy = factory::create_category(db).await?;
        let cheese = factory::create_subcategory(db, dairy.id).await?;

        let result = ProductService::new(db)
            .create_product(ProductParams {
                subcategory_id: Some(cheese.id),
                ..params(shop.id, fruit.id)
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests that a shop cannot update another shop's product.
    ///
    /// Expected: Err(AppError::NotFound)
    #[tokio::test]
    async fn foreign_product_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_owner, category, product) =
            factory::helpers::create_product_with_dependencies(db).await?;
        let other = factory::create_shop(db).await?;

        let service = ProductService::new(db);
        let update = service
            .update_product(product.id, params(other.id, category.id))
            .await;
        let delete = service.delete_product(product.id, other.id).await;

        assert!(matches!(update, Err(AppError::NotFound(_))));
        assert!(matches!(delete, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Tests that a soft-deleted product is hidden from the detail view.
    ///
    /// Expected: Err(AppError::NotFound) after delete
    #[tokio::test]
    async fn deleted_product_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (shop, _category, product) =
            factory::helpers::create_product_with_dependencies(db).await?;
        let service = ProductService::new(db);

        service.delete_product(product.id, shop.id).await?;

        assert!(matches!(
            service.get_product(product.id).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }

    /// Tests reviewing a delivered purchase twice.
    ///
    /// Expected: first review sets rating 4 with one review, second is rejected
    #[tokio::test]
    async fn review_marks_line_and_updates_rating() -> Result<(), AppError> {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let (shop, _category, product) =
            factory::helpers::create_product_with_dependencies(db).await?;
        let order = factory::order::OrderFactory::new(db, user.id, shop.id)
            .item(product.id, 1_000, 1)
            .status("Delivered")
            .build()
            .await?;

        let review = || CreateReviewParams {
            user_id: user.id,
            product_id: product.id,
            order_id: order.id,
            rating: 4,
            comment: "Fresh".to_string(),
        };

        let service = ProductService::new(db);
        let updated = service.create_review(review()).await?;

        assert_eq!(updated.review_count, 1);
        assert!((updated.rating - 4.0).abs() < f64::EPSILON);

        let again = service.create_review(review()).await;
        assert!(matches!(again, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests reviewing an order that has not been delivered.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn review_requires_delivered_order() -> Result<(), AppError> {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, _shop, product, order) =
            factory::helpers::create_order_with_dependencies(db).await?;

        let result = ProductService::new(db)
            .create_review(CreateReviewParams {
                user_id: user.id,
                product_id: product.id,
                order_id: order.id,
                rating: 5,
                comment: String::new(),
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }
}
