use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{CountMessageDto, ErrorDto, MessageDto},
        notification::{NotificationDto, SendNotificationDto, UnreadCountDto},
    },
    server::{
        controller::extract::{JsonBody, PathParam, QueryParams},
        controller::param::{BroadcastParam, NotificationListParam},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            notification::{CreateNotificationParams, NotificationFilter},
            page::Page,
        },
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notifications";

/// The caller's notifications, newest first.
#[utoipa::path(
    get,
    path = "/",
    tag = NOTIFICATION_TAG,
    security(("bearer_auth" = [])),
    params(NotificationListParam),
    responses(
        (status = 200, description = "Notifications", body = Vec<NotificationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    QueryParams(params): QueryParams<NotificationListParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    params.validate()?;

    let notifications: Vec<NotificationDto> = NotificationService::new(&state.db)
        .get_for_user(
            user.id,
            NotificationFilter {
                unread_only: params.unread_only,
                page: Page::new(params.skip, params.limit),
            },
        )
        .await?
        .into_iter()
        .map(|n| n.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(notifications)))
}

#[utoipa::path(
    get,
    path = "/unread-count",
    tag = NOTIFICATION_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Unread notification count", body = UnreadCountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unread_count(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let unread_count = NotificationService::new(&state.db)
        .count_unread(user.id)
        .await?;

    Ok((StatusCode::OK, Json(UnreadCountDto { unread_count })))
}

/// Mark one of the caller's notifications as read.
///
/// Notifications belonging to other users are reported as not found.
#[utoipa::path(
    patch,
    path = "/{id}/read",
    tag = NOTIFICATION_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Marked as read", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    NotificationService::new(&state.db)
        .mark_read(user.id, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Notification marked as read")),
    ))
}

#[utoipa::path(
    patch,
    path = "/read-all",
    tag = NOTIFICATION_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All marked as read", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_all_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let updated = NotificationService::new(&state.db)
        .mark_all_read(user.id)
        .await?;
    tracing::debug!("Marked {} notifications read for user {}", updated, user.id);

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("All notifications marked as read")),
    ))
}

/// Send a notification to one user.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/send",
    tag = NOTIFICATION_TAG,
    security(("bearer_auth" = [])),
    request_body = SendNotificationDto,
    responses(
        (status = 201, description = "Notification sent", body = NotificationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Target user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<SendNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let notification = NotificationService::new(&state.db)
        .send(CreateNotificationParams {
            user_id: payload.user_id,
            title: payload.title,
            message: payload.message,
            kind: payload.kind.into(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(notification.into_dto())))
}

/// Send the same notification to every user.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/broadcast",
    tag = NOTIFICATION_TAG,
    security(("bearer_auth" = [])),
    params(BroadcastParam),
    responses(
        (status = 201, description = "Notification broadcast", body = CountMessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn broadcast(
    State(state): State<AppState>,
    headers: HeaderMap,
    QueryParams(params): QueryParams<BroadcastParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let count = NotificationService::new(&state.db)
        .broadcast(params.title, params.message, params.notification_type.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CountMessageDto {
            message: format!("Notification sent to {} users", count),
            count,
        }),
    ))
}
