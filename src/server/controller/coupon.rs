use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        coupon::{CouponDto, CreateCouponDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::coupon::{Coupon, CreateCouponParams},
        service::coupon::CouponService,
        state::AppState,
    },
};

/// Tag for grouping coupon endpoints in OpenAPI documentation
pub static COUPON_TAG: &str = "coupon";

/// Look up a coupon by code so a cart can preview its discount.
#[utoipa::path(
    get,
    path = "/api/coupons/{code}",
    tag = COUPON_TAG,
    params(("code" = String, Path, description = "Coupon code")),
    responses(
        (status = 200, description = "Coupon", body = CouponDto),
        (status = 404, description = "Coupon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_coupon(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let coupon = CouponService::new(&state.db)
        .get_coupon_by_code(&code)
        .await?;

    Ok((StatusCode::OK, Json(coupon.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/shop/coupons",
    tag = COUPON_TAG,
    responses(
        (status = 200, description = "Own coupons", body = Vec<CouponDto>),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_shop_coupons(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let coupons = CouponService::new(&state.db)
        .list_shop_coupons(shop.id)
        .await?;

    let dto: Vec<CouponDto> = coupons.into_iter().map(Coupon::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Create a percentage coupon for the logged-in shop.
///
/// # Returns
/// - `201 Created` - The coupon
/// - `400 Bad Request` - Empty code, value outside 1..=100, min above max or a
///   product from another shop
/// - `409 Conflict` - Code already taken
#[utoipa::path(
    post,
    path = "/api/shop/coupons",
    tag = COUPON_TAG,
    request_body = CreateCouponDto,
    responses(
        (status = 201, description = "Coupon created", body = CouponDto),
        (status = 400, description = "Invalid coupon data", body = ErrorDto),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 409, description = "Coupon code already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_coupon(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCouponDto>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let coupon = CouponService::new(&state.db)
        .create_coupon(CreateCouponParams::from_dto(shop.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(coupon.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/shop/coupons/{id}",
    tag = COUPON_TAG,
    params(("id" = i32, Path, description = "Coupon ID")),
    responses(
        (status = 204, description = "Coupon deleted"),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 404, description = "Coupon not found in this shop", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_coupon(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    CouponService::new(&state.db)
        .delete_coupon(id, shop.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
