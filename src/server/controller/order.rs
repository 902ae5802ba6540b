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
        order::{
            OrderDto, OrderStatus, PlaceOrderDto, UpdateDeliveryStatusDto, UpdateOrderStatusDto,
        },
    },
    server::{
        controller::{default_entries, PaginationParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::order::{Actor, Order, PlaceOrderParams},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Order listing query with an optional status filter.
#[derive(Deserialize)]
pub struct OrderQuery {
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

/// Check out a cart.
///
/// The cart is split into one order per shop. Either every order is created
/// and stock reserved, or nothing is.
///
/// # Access Control
/// - Logged-in user
///
/// # Returns
/// - `201 Created` - One order per shop in the cart
/// - `400 Bad Request` - Empty cart, bad quantity, not enough stock, missing
///   address fields, missing card reference or a rejected coupon
/// - `404 Not Found` - A product in the cart does not exist
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = PlaceOrderDto,
    responses(
        (status = 201, description = "Orders placed", body = Vec<OrderDto>),
        (status = 400, description = "Invalid cart", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PlaceOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let orders = OrderService::new(&state.db, state.settlement)
        .place_order(PlaceOrderParams::from_dto(user.id, payload))
        .await?;

    let dto: Vec<OrderDto> = orders.into_iter().map(Order::into_dto).collect();

    Ok((StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Own orders, newest first", body = PaginatedDto<OrderDto>),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_user_orders(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let orders = OrderService::new(&state.db, state.settlement)
        .list_user_orders(user.id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto(Order::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order", body = OrderDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = OrderService::new(&state.db, state.settlement)
        .get_user_order(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Cancel one of the user's orders while it is still `Processing`.
#[utoipa::path(
    post,
    path = "/api/orders/{id}/cancel",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order cancelled", body = OrderDto),
        (status = 400, description = "Order can no longer be cancelled", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_user_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = OrderService::new(&state.db, state.settlement)
        .cancel_order(Actor::User, user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Ask for a refund on a delivered order.
#[utoipa::path(
    post,
    path = "/api/orders/{id}/refund",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Refund requested", body = OrderDto),
        (status = 400, description = "Order is not delivered", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_refund(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = OrderService::new(&state.db, state.settlement)
        .request_refund(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/shop/orders",
    tag = ORDER_TAG,
    params(
        ("status" = Option<OrderStatus>, Query, description = "Only orders in this status"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Shop orders, newest first", body = PaginatedDto<OrderDto>),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_shop_orders(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<OrderQuery>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let orders = OrderService::new(&state.db, state.settlement)
        .list_shop_orders(shop.id, query.status, query.page, query.entries)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto(Order::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/shop/orders/{id}",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order", body = OrderDto),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 404, description = "Order not found in this shop", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shop_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let order = OrderService::new(&state.db, state.settlement)
        .get_shop_order(shop.id, id)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Move one of the shop's orders along its lifecycle.
///
/// Handing an order to a delivery partner takes an optional
/// `delivery_man_id`. Reaching `Delivered` credits the seller balance with
/// the order total minus the service charge.
///
/// # Returns
/// - `200 OK` - The updated order
/// - `400 Bad Request` - Illegal transition or inactive delivery-man
/// - `404 Not Found` - Order not found in this shop
#[utoipa::path(
    put,
    path = "/api/shop/orders/{id}/status",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 400, description = "Illegal status change", body = ErrorDto),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 404, description = "Order not found in this shop", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let order = OrderService::new(&state.db, state.settlement)
        .update_status(shop.id, id, payload.status, payload.delivery_man_id)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/shop/orders/{id}/cancel",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order cancelled", body = OrderDto),
        (status = 400, description = "Order can no longer be cancelled", body = ErrorDto),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 404, description = "Order not found in this shop", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_shop_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let order = OrderService::new(&state.db, state.settlement)
        .cancel_order(Actor::Shop, shop.id, id)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Approve a pending refund; stock is restored and any settlement reversed.
#[utoipa::path(
    post,
    path = "/api/shop/orders/{id}/refund",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Refund approved", body = OrderDto),
        (status = 400, description = "No refund pending", body = ErrorDto),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 404, description = "Order not found in this shop", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_refund(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let order = OrderService::new(&state.db, state.settlement)
        .approve_refund(shop.id, id)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/delivery/orders",
    tag = ORDER_TAG,
    params(
        ("status" = Option<OrderStatus>, Query, description = "Only orders in this status"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Assigned orders", body = PaginatedDto<OrderDto>),
        (status = 401, description = "Delivery-man not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_delivery_orders(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<OrderQuery>,
) -> Result<impl IntoResponse, AppError> {
    let delivery_man = AuthGuard::new(&state.db, &session)
        .require_delivery_man()
        .await?;

    let orders = OrderService::new(&state.db, state.settlement)
        .list_delivery_orders(delivery_man.id, query.status, query.page, query.entries)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto(Order::into_dto))))
}

/// Advance an assigned order through `Shipping`, `OnTheWay` and `Delivered`.
#[utoipa::path(
    put,
    path = "/api/delivery/orders/{id}/status",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateDeliveryStatusDto,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 400, description = "Illegal status change", body = ErrorDto),
        (status = 401, description = "Delivery-man not logged in", body = ErrorDto),
        (status = 404, description = "Order not assigned to this delivery-man", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_delivery_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDeliveryStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let delivery_man = AuthGuard::new(&state.db, &session)
        .require_delivery_man()
        .await?;

    let order = OrderService::new(&state.db, state.settlement)
        .update_delivery_status(delivery_man.id, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = ORDER_TAG,
    params(
        ("status" = Option<OrderStatus>, Query, description = "Only orders in this status"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "All orders, newest first", body = PaginatedDto<OrderDto>),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_all_orders(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<OrderQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let orders = OrderService::new(&state.db, state.settlement)
        .list_all_orders(query.status, query.page, query.entries)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto(Order::into_dto))))
}
