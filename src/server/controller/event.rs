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
        event::{CreateEventDto, EventDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::event::{CreateEventParams, Event},
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Running events across all shops.
///
/// Events past their finish date are ended by the scheduler and drop out of
/// this listing.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Running events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_running_events(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).list_running_events().await?;

    let dto: Vec<EventDto> = events.into_iter().map(Event::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/shop/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Own events", body = Vec<EventDto>),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_shop_events(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let events = EventService::new(&state.db)
        .list_shop_events(shop.id)
        .await?;

    let dto: Vec<EventDto> = events.into_iter().map(Event::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Create a time-boxed promotional event for the logged-in shop.
///
/// # Returns
/// - `201 Created` - The event
/// - `400 Bad Request` - Empty name, bad pricing, finish not after start or
///   unknown category
#[utoipa::path(
    post,
    path = "/api/shop/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    let event = EventService::new(&state.db)
        .create_event(CreateEventParams::from_dto(shop.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/shop/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Shop not logged in", body = ErrorDto),
        (status = 404, description = "Event not found in this shop", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let shop = AuthGuard::new(&state.db, &session).require_shop().await?;

    EventService::new(&state.db)
        .delete_event(id, shop.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/events",
    tag = EVENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of all events", body = PaginatedDto<EventDto>),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_all_events(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let events = EventService::new(&state.db)
        .list_all_events(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(events.into_dto(Event::into_dto))))
}
