use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        auth::{LoginDto, RegisterShopDto, RegisterUserDto},
        delivery_man::DeliveryManDto,
        shop::ShopDto,
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::session::AuthSession,
        model::auth::{Credentials, RegisterShopParams, RegisterUserParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a customer account and log it in.
///
/// # Returns
/// - `201 Created` - Account created, session holds the new user
/// - `400 Bad Request` - Empty name, invalid email or short password
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .register_user(RegisterUserParams::from_dto(payload))
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto(Vec::new()))))
}

#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login_user(Credentials::from_dto(payload))
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto(Vec::new()))))
}

/// Register a seller account and log it in.
///
/// # Returns
/// - `201 Created` - Shop created with a zero balance
/// - `400 Bad Request` - Missing required field, invalid email or short password
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/shops/register",
    tag = AUTH_TAG,
    request_body = RegisterShopDto,
    responses(
        (status = 201, description = "Shop registered", body = ShopDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_shop(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterShopDto>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthService::new(&state.db)
        .register_shop(RegisterShopParams::from_dto(payload))
        .await?;

    AuthSession::new(&session).set_shop_id(shop.id).await?;

    Ok((StatusCode::CREATED, Json(shop.into_dto(None))))
}

#[utoipa::path(
    post,
    path = "/api/shops/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ShopDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_shop(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthService::new(&state.db)
        .login_shop(Credentials::from_dto(payload))
        .await?;

    AuthSession::new(&session).set_shop_id(shop.id).await?;

    Ok((StatusCode::OK, Json(shop.into_dto(None))))
}

/// Log a delivery-man in. Deactivated accounts are refused like a wrong password.
#[utoipa::path(
    post,
    path = "/api/delivery/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = DeliveryManDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_delivery_man(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let delivery_man = AuthService::new(&state.db)
        .login_delivery_man(Credentials::from_dto(payload))
        .await?;

    AuthSession::new(&session)
        .set_delivery_man_id(delivery_man.id)
        .await?;

    Ok((StatusCode::OK, Json(delivery_man.into_dto())))
}

/// Log out every principal held by the session.
///
/// Mounted under `/api/users`, `/api/shops` and `/api/delivery`.
#[utoipa::path(
    post,
    path = "/api/users/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = StatusDto),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: "logged out".to_string(),
        }),
    ))
}
