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
        banner::{BannerDto, BannerFormDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::banner::{Banner, BannerParams},
        service::banner::BannerService,
        state::AppState,
    },
};

/// Tag for grouping banner endpoints in OpenAPI documentation
pub static BANNER_TAG: &str = "banner";

/// Active storefront banners ordered by position.
#[utoipa::path(
    get,
    path = "/api/banners",
    tag = BANNER_TAG,
    responses(
        (status = 200, description = "Active banners", body = Vec<BannerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_active_banners(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let banners = BannerService::new(&state.db).list_active_banners().await?;

    let dto: Vec<BannerDto> = banners.into_iter().map(Banner::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Every banner including inactive ones.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/banners",
    tag = BANNER_TAG,
    responses(
        (status = 200, description = "All banners", body = Vec<BannerDto>),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_all_banners(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let banners = BannerService::new(&state.db).list_all_banners().await?;

    let dto: Vec<BannerDto> = banners.into_iter().map(Banner::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/admin/banners",
    tag = BANNER_TAG,
    request_body = BannerFormDto,
    responses(
        (status = 201, description = "Banner created", body = BannerDto),
        (status = 400, description = "Missing title or image", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_banner(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BannerFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let banner = BannerService::new(&state.db)
        .create_banner(BannerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(banner.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/banners/{id}",
    tag = BANNER_TAG,
    params(("id" = i32, Path, description = "Banner ID")),
    request_body = BannerFormDto,
    responses(
        (status = 200, description = "Banner updated", body = BannerDto),
        (status = 400, description = "Missing title or image", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_banner(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<BannerFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let banner = BannerService::new(&state.db)
        .update_banner(id, BannerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(banner.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/banners/{id}",
    tag = BANNER_TAG,
    params(("id" = i32, Path, description = "Banner ID")),
    responses(
        (status = 204, description = "Banner deleted"),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    BannerService::new(&state.db).delete_banner(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
