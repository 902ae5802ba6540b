use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto, StatusDto},
        auth::ChangePasswordDto,
        user::{SetRoleDto, UpdateProfileDto, UpsertAddressDto, UserAddressDto, UserDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{UpdateProfileParams, UpsertAddressParams, UserAddress},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the logged-in user with their saved addresses.
///
/// # Access Control
/// - Any logged-in user
///
/// # Returns
/// - `200 OK` - The user's profile
/// - `401 Unauthorized` - No user logged in
/// - `404 Not Found` - Session refers to a deleted user
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (user, addresses) = UserService::new(&state.db).get_profile(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto(addresses))))
}

#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (user, addresses) = UserService::new(&state.db)
        .update_profile(UpdateProfileParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto(addresses))))
}

/// Change the logged-in user's password.
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - New password too short
/// - `401 Unauthorized` - Not logged in or the old password is wrong
#[utoipa::path(
    put,
    path = "/api/users/me/password",
    tag = USER_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = StatusDto),
        (status = 400, description = "New password too short", body = ErrorDto),
        (status = 401, description = "Not logged in or wrong password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    UserService::new(&state.db)
        .change_password(user.id, &payload.old_password, &payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: "password changed".to_string(),
        }),
    ))
}

/// Add or replace the address saved under `address_type`.
#[utoipa::path(
    put,
    path = "/api/users/me/addresses",
    tag = USER_TAG,
    request_body = UpsertAddressDto,
    responses(
        (status = 200, description = "All saved addresses", body = Vec<UserAddressDto>),
        (status = 400, description = "Missing address field", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_address(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertAddressDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let addresses = UserService::new(&state.db)
        .upsert_address(UpsertAddressParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(addresses_dto(addresses))))
}

#[utoipa::path(
    delete,
    path = "/api/users/me/addresses/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "Address ID")),
    responses(
        (status = 200, description = "Remaining addresses", body = Vec<UserAddressDto>),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Address not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_address(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let addresses = UserService::new(&state.db)
        .delete_address(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(addresses_dto(addresses))))
}

/// Get a page of all customer accounts.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of users", body = PaginatedDto<UserDto>),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .list_users(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto(|u| u.into_dto(Vec::new())))))
}

/// Delete a customer account; their orders and reviews are removed with it.
///
/// # Access Control
/// - `Admin` - Cannot delete their own account
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Admin tried to delete themself", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "User has order history", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete_user(admin.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/role",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = SetRoleDto,
    responses(
        (status = 204, description = "Role updated"),
        (status = 400, description = "Admin tried to demote themself", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_role(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SetRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db)
        .set_role(admin.id, id, payload.role)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

fn addresses_dto(addresses: Vec<UserAddress>) -> Vec<UserAddressDto> {
    addresses.into_iter().map(UserAddress::into_dto).collect()
}
