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
        withdraw::{CreateWithdrawDto, UpdateWithdrawDto, WithdrawRequestDto, WithdrawStatus},
    },
    server::{
        controller::default_entries,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::withdraw::WithdrawRequest,
        service::withdraw::WithdrawService,
        state::AppState,
    },
};

/// Tag for grouping withdrawal endpoints in OpenAPI documentation
pub static WITHDRAW_TAG: &str = "withdraw";

#[derive(Deserialize)]
pub struct WithdrawQuery {
    pub status: Option<WithdrawStatus>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

#[utoipa::path(
    get,
    path = "/api/shop/withdrawals",
    tag = WITHDRAW_TAG,
    responses(
        (status = 200, description = "Own withdrawal requests, newest first", body = Vec<WithdrawRequestDto>),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_withdrawals(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let requests = WithdrawService::new(&state.db, state.settlement)
        .list_withdrawals(shop.id)
        .await?;

    let dto: Vec<WithdrawRequestDto> = requests
        .into_iter()
        .map(WithdrawRequest::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Request a payout of part of the shop's available balance.
///
/// The amount leaves the balance immediately and comes back if an admin
/// rejects the request.
///
/// # Returns
/// - `201 Created` - The pending request
/// - `400 Bad Request` - Below the minimum, above the balance or no withdraw
///   method on file
#[utoipa::path(
    post,
    path = "/api/shop/withdrawals",
    tag = WITHDRAW_TAG,
    request_body = CreateWithdrawDto,
    responses(
        (status = 201, description = "Withdrawal requested", body = WithdrawRequestDto),
        (status = 400, description = "Withdrawal not allowed", body = ErrorDto),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_withdrawal(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateWithdrawDto>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let request = WithdrawService::new(&state.db, state.settlement)
        .request_withdrawal(shop.id, payload.amount)
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/withdrawals",
    tag = WITHDRAW_TAG,
    params(
        ("status" = Option<WithdrawStatus>, Query, description = "Only requests in this status"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of withdrawal requests", body = PaginatedDto<WithdrawRequestDto>),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_all_withdrawals(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<WithdrawQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let requests = WithdrawService::new(&state.db, state.settlement)
        .list_all_withdrawals(query.status, query.page, query.entries)
        .await?;

    Ok((
        StatusCode::OK,
        Json(requests.into_dto(WithdrawRequest::into_dto)),
    ))
}

/// Settle or reject a pending withdrawal.
///
/// # Returns
/// - `200 OK` - The updated request
/// - `400 Bad Request` - Target status is `processing`
/// - `404 Not Found` - Request not found
/// - `409 Conflict` - Request was already settled or rejected
#[utoipa::path(
    put,
    path = "/api/admin/withdrawals/{id}",
    tag = WITHDRAW_TAG,
    params(("id" = i32, Path, description = "Withdrawal request ID")),
    request_body = UpdateWithdrawDto,
    responses(
        (status = 200, description = "Withdrawal updated", body = WithdrawRequestDto),
        (status = 400, description = "Invalid target status", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Withdrawal not found", body = ErrorDto),
        (status = 409, description = "Withdrawal already finalised", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_withdrawal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateWithdrawDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let request = WithdrawService::new(&state.db, state.settlement)
        .update_withdrawal(id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}
