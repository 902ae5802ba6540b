use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        product::{CreateReviewDto, ProductDetailDto, ProductDto, ProductFormDto},
    },
    server::{
        controller::{default_entries, PaginationParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::product::{CreateReviewParams, Product, ProductFilter, ProductParams, ProductReview},
        service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// Catalogue query: optional filters plus pagination.
#[derive(Deserialize)]
pub struct ProductQuery {
    pub category_id: Option<i32>,
    pub subcategory_id: Option<i32>,
    pub shop_id: Option<i32>,
    pub search: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl ProductQuery {
    fn filter(&self) -> ProductFilter {
        ProductFilter {
            category_id: self.category_id,
            subcategory_id: self.subcategory_id,
            shop_id: self.shop_id,
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}

/// Browse live products, newest first.
///
/// `search` matches product names case-insensitively.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(
        ("category_id" = Option<i32>, Query, description = "Only this category"),
        ("subcategory_id" = Option<i32>, Query, description = "Only this subcategory"),
        ("shop_id" = Option<i32>, Query, description = "Only this shop"),
        ("search" = Option<String>, Query, description = "Name substring"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of products", body = PaginatedDto<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db)
        .list_products(query.filter(), query.page, query.entries)
        .await?;

    Ok((StatusCode::OK, Json(products.into_dto(Product::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product with reviews", body = ProductDetailDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (product, reviews) = ProductService::new(&state.db).get_product(id).await?;

    Ok((
        StatusCode::OK,
        Json(ProductDetailDto {
            product: product.into_dto(),
            reviews: reviews.into_iter().map(ProductReview::into_dto).collect(),
        }),
    ))
}

/// Review a product from one of the user's delivered orders.
///
/// # Access Control
/// - Logged-in user who owns the order
///
/// # Returns
/// - `201 Created` - The product with its recomputed rating
/// - `400 Bad Request` - Rating outside 1..=5, order not delivered, product
///   not in the order or already reviewed
/// - `404 Not Found` - Order not found for this user
#[utoipa::path(
    post,
    path = "/api/products/{id}/reviews",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review recorded", body = ProductDto),
        (status = 400, description = "Review not allowed", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let product = ProductService::new(&state.db)
        .create_review(CreateReviewParams::from_dto(user.id, id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// The logged-in shop's live products.
#[utoipa::path(
    get,
    path = "/api/shop/products",
    tag = PRODUCT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of own products", body = PaginatedDto<ProductDto>),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_shop_products(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let filter = ProductFilter {
        shop_id: Some(shop.id),
        ..Default::default()
    };
    let products = ProductService::new(&state.db)
        .list_products(filter, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(products.into_dto(Product::into_dto))))
}

/// List a new product.
///
/// # Returns
/// - `201 Created` - The product
/// - `400 Bad Request` - Empty name, bad pricing or stock, unknown category or
///   a subcategory of another category
#[utoipa::path(
    post,
    path = "/api/shop/products",
    tag = PRODUCT_TAG,
    request_body = ProductFormDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ProductFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let product = ProductService::new(&state.db)
        .create_product(ProductParams::from_dto(shop.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/shop/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductFormDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 404, description = "Product not found in this shop", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ProductFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let product = ProductService::new(&state.db)
        .update_product(id, ProductParams::from_dto(shop.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/shop/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product removed from sale"),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 404, description = "Product not found in this shop", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    ProductService::new(&state.db)
        .delete_product(id, shop.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/products",
    tag = PRODUCT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of all live products", body = PaginatedDto<ProductDto>),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_all_products(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let products = ProductService::new(&state.db)
        .list_products(ProductFilter::default(), params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(products.into_dto(Product::into_dto))))
}
