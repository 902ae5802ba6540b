use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto},
        shop::{ShopDto, ShopInfoDto, ShopTransactionDto, UpdateShopDto, WithdrawMethodDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::shop::{Shop, ShopTransaction, UpdateShopParams, WithdrawMethod},
        service::shop::ShopService,
        state::AppState,
    },
};

/// Tag for grouping shop endpoints in OpenAPI documentation
pub static SHOP_TAG: &str = "shop";

/// Public storefront details of a shop.
#[utoipa::path(
    get,
    path = "/api/shops/{id}",
    tag = SHOP_TAG,
    params(("id" = i32, Path, description = "Shop ID")),
    responses(
        (status = 200, description = "Shop details", body = ShopInfoDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shop_info(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let shop = ShopService::new(&state.db).get_shop_info(id).await?;

    Ok((StatusCode::OK, Json(shop.into_info_dto())))
}

/// The logged-in seller's shop, including balance and withdraw method.
///
/// # Access Control
/// - Logged-in shop
#[utoipa::path(
    get,
    path = "/api/shop/me",
    tag = SHOP_TAG,
    responses(
        (status = 200, description = "Own shop", body = ShopDto),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_shop(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let (shop, method) = ShopService::new(&state.db).get_own(shop.id).await?;

    Ok((StatusCode::OK, Json(shop.into_dto(method))))
}

#[utoipa::path(
    put,
    path = "/api/shop/me",
    tag = SHOP_TAG,
    request_body = UpdateShopDto,
    responses(
        (status = 200, description = "Shop updated", body = ShopDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_shop(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateShopDto>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let (shop, method) = ShopService::new(&state.db)
        .update_shop(UpdateShopParams::from_dto(shop.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(shop.into_dto(method))))
}

/// Set or replace the bank account payouts are sent to.
#[utoipa::path(
    put,
    path = "/api/shop/withdraw-method",
    tag = SHOP_TAG,
    request_body = WithdrawMethodDto,
    responses(
        (status = 200, description = "Withdraw method saved", body = WithdrawMethodDto),
        (status = 400, description = "Missing bank detail", body = ErrorDto),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_withdraw_method(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<WithdrawMethodDto>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let method = ShopService::new(&state.db)
        .set_withdraw_method(shop.id, WithdrawMethod::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(method.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/shop/withdraw-method",
    tag = SHOP_TAG,
    responses(
        (status = 204, description = "Withdraw method removed"),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 404, description = "No withdraw method configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_withdraw_method(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    ShopService::new(&state.db)
        .delete_withdraw_method(shop.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Balance ledger: settlements, refunds and withdrawals, newest first.
#[utoipa::path(
    get,
    path = "/api/shop/transactions",
    tag = SHOP_TAG,
    responses(
        (status = 200, description = "Ledger entries", body = Vec<ShopTransactionDto>),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_transactions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let transactions = ShopService::new(&state.db)
        .list_transactions(shop.id)
        .await?;

    let dto: Vec<ShopTransactionDto> = transactions
        .into_iter()
        .map(ShopTransaction::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/shops",
    tag = SHOP_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of shops", body = PaginatedDto<ShopDto>),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_shops(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let shops = ShopService::new(&state.db)
        .list_shops(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(shops.into_dto(|s: Shop| s.into_dto(None)))))
}

/// Delete a shop with its products, events, coupons, orders and ledger.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/admin/shops/{id}",
    tag = SHOP_TAG,
    params(("id" = i32, Path, description = "Shop ID")),
    responses(
        (status = 204, description = "Shop deleted"),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Shop not found", body = ErrorDto),
        (status = 409, description = "Shop has order history", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_shop(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ShopService::new(&state.db).delete_shop(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
