use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use entity::poll::PollOption;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        poll::{CreatePollDto, PollDto, VoteDto},
    },
    server::{
        controller::extract::{JsonBody, PathParam, QueryParams},
        controller::param::PollListParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::poll::{CreatePollParams, PollStatusFilter},
        service::poll::PollService,
        state::AppState,
    },
};

/// Tag for grouping poll endpoints in OpenAPI documentation
pub static POLL_TAG: &str = "polls";

/// List polls with their tallies, newest first.
#[utoipa::path(
    get,
    path = "/",
    tag = POLL_TAG,
    security(("bearer_auth" = [])),
    params(PollListParam),
    responses(
        (status = 200, description = "Polls", body = Vec<PollDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_polls(
    State(state): State<AppState>,
    headers: HeaderMap,
    QueryParams(params): QueryParams<PollListParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let polls: Vec<PollDto> = PollService::new(&state.db)
        .get_all(PollStatusFilter::parse(params.status.as_deref()))
        .await?
        .into_iter()
        .map(|p| p.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(polls)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = POLL_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Poll ID")),
    responses(
        (status = 200, description = "Poll", body = PollDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_poll(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Some(poll) = PollService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound("Poll not found".to_string()));
    };

    Ok((StatusCode::OK, Json(poll.into_dto())))
}

/// Create an open poll.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - New poll with zero votes
/// - `400 Bad Request` - Duplicate option ids
#[utoipa::path(
    post,
    path = "/",
    tag = POLL_TAG,
    security(("bearer_auth" = [])),
    request_body = CreatePollDto,
    responses(
        (status = 201, description = "Poll created", body = PollDto),
        (status = 400, description = "Invalid options", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 422, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_poll(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreatePollDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let params = CreatePollParams {
        title: payload.title,
        description: payload.description,
        options: payload
            .options
            .into_iter()
            .map(|o| PollOption {
                id: o.id,
                text: o.text,
            })
            .collect(),
        expires_at: payload.expires_at,
        created_by: user.id,
    };

    let poll = PollService::new(&state.db).create(&user, params).await?;

    Ok((StatusCode::CREATED, Json(poll.into_dto())))
}

/// Vote for one option. Each user votes once per poll.
///
/// # Returns
/// - `200 OK` - Vote recorded
/// - `400 Bad Request` - Poll closed or expired, already voted, or unknown option
/// - `404 Not Found` - Poll does not exist
#[utoipa::path(
    post,
    path = "/{id}/vote",
    tag = POLL_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Poll ID")),
    request_body = VoteDto,
    responses(
        (status = 200, description = "Vote recorded", body = MessageDto),
        (status = 400, description = "Vote rejected", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn vote(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<VoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    PollService::new(&state.db)
        .vote(user.id, id, payload.option_id, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Vote recorded successfully"))))
}

/// Close a poll to further votes.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    patch,
    path = "/{id}/close",
    tag = POLL_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Poll ID")),
    responses(
        (status = 200, description = "Poll closed", body = MessageDto),
        (status = 400, description = "Poll is already closed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn close_poll(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    PollService::new(&state.db).close(&user, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Poll closed successfully"))))
}
