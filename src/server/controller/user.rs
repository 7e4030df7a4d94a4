use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateProfileDto, UserDto},
    },
    server::{
        controller::extract::{JsonBody, PathParam, QueryParams},
        controller::param::UserListParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            page::Page,
            user::{UpdateProfileParams, UserFilter},
        },
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

/// Update the caller's name and/or department.
///
/// Fields left out of the body keep their current value.
#[utoipa::path(
    put,
    path = "/profile",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let user = UserService::new(&state.db)
        .update_profile(
            user.id,
            UpdateProfileParams {
                name: payload.name,
                department: payload.department,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List users ordered by id.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(UserListParam),
    responses(
        (status = 200, description = "Users", body = Vec<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 422, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    QueryParams(params): QueryParams<UserListParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    params.validate()?;

    let users = UserService::new(&state.db)
        .get_all(UserFilter {
            department: params.department,
            page: Page::new(params.skip, params.limit),
        })
        .await?;

    let users: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Get a user by id.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = USER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Some(user) = UserService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    Ok((StatusCode::OK, Json(user.into_dto())))
}
