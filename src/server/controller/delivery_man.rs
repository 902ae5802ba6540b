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
        delivery_man::{CreateDeliveryManDto, DeliveryManDto, UpdateDeliveryManDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::delivery_man::{DeliveryMan, RegisterDeliveryManParams, UpdateDeliveryManParams},
        service::delivery_man::DeliveryManService,
        state::AppState,
    },
};

/// Tag for grouping delivery-man endpoints in OpenAPI documentation
pub static DELIVERY_MAN_TAG: &str = "delivery-man";

#[utoipa::path(
    get,
    path = "/api/admin/delivery-men",
    tag = DELIVERY_MAN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of delivery-men", body = PaginatedDto<DeliveryManDto>),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_delivery_men(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let delivery_men = DeliveryManService::new(&state.db)
        .list_delivery_men(params.page, params.entries)
        .await?;

    Ok((
        StatusCode::OK,
        Json(delivery_men.into_dto(DeliveryMan::into_dto)),
    ))
}

/// Create a delivery-man account.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new account, active
/// - `400 Bad Request` - Missing name or phone, invalid email or weak password
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/admin/delivery-men",
    tag = DELIVERY_MAN_TAG,
    request_body = CreateDeliveryManDto,
    responses(
        (status = 201, description = "Delivery-man created", body = DeliveryManDto),
        (status = 400, description = "Invalid delivery-man data", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 409, description = "Email is already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_delivery_man(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDeliveryManDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let delivery_man = DeliveryManService::new(&state.db)
        .create_delivery_man(RegisterDeliveryManParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(delivery_man.into_dto())))
}

/// Update a delivery-man; deactivating one stops new assignments.
#[utoipa::path(
    put,
    path = "/api/admin/delivery-men/{id}",
    tag = DELIVERY_MAN_TAG,
    params(("id" = i32, Path, description = "Delivery-man ID")),
    request_body = UpdateDeliveryManDto,
    responses(
        (status = 200, description = "Delivery-man updated", body = DeliveryManDto),
        (status = 400, description = "Invalid delivery-man data", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Delivery-man not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_delivery_man(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDeliveryManDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let delivery_man = DeliveryManService::new(&state.db)
        .update_delivery_man(UpdateDeliveryManParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(delivery_man.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/delivery-men/{id}",
    tag = DELIVERY_MAN_TAG,
    params(("id" = i32, Path, description = "Delivery-man ID")),
    responses(
        (status = 204, description = "Delivery-man deleted"),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Delivery-man not found", body = ErrorDto),
        (status = 409, description = "Delivery-man has orders in flight", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_delivery_man(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    DeliveryManService::new(&state.db)
        .delete_delivery_man(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/delivery/me",
    tag = DELIVERY_MAN_TAG,
    responses(
        (status = 200, description = "Own profile", body = DeliveryManDto),
        (status = 401, description = "Delivery-man not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_delivery_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let delivery_man = AuthGuard::new(&state.db, &session)
        .require_delivery_man()
        .await?;

    Ok((StatusCode::OK, Json(delivery_man.into_dto())))
}
