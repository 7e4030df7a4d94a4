use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        schedule::{CreateScheduleDto, ScheduleDto, UpdateScheduleDto},
    },
    server::{
        controller::extract::{JsonBody, PathParam, QueryParams},
        controller::param::ScheduleListParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::schedule::{
            CreateScheduleParams, ScheduleFilter, ScheduleStatusQuery, UpdateScheduleParams,
        },
        service::schedule::ScheduleService,
        state::AppState,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedules";

fn not_found() -> AppError {
    AppError::NotFound("Schedule not found".to_string())
}

/// List schedules, most recently updated first.
#[utoipa::path(
    get,
    path = "/",
    tag = SCHEDULE_TAG,
    security(("bearer_auth" = [])),
    params(ScheduleListParam),
    responses(
        (status = 200, description = "Schedules", body = Vec<ScheduleDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules(
    State(state): State<AppState>,
    headers: HeaderMap,
    QueryParams(params): QueryParams<ScheduleListParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let status = match ScheduleStatusQuery::parse(params.status.as_deref()) {
        ScheduleStatusQuery::Any => None,
        ScheduleStatusQuery::Exactly(status) => Some(status),
        ScheduleStatusQuery::Unknown => {
            return Ok((StatusCode::OK, Json(Vec::<ScheduleDto>::new())));
        }
    };

    let schedules: Vec<ScheduleDto> = ScheduleService::new(&state.db)
        .get_all(ScheduleFilter {
            search: params.search,
            status,
        })
        .await?
        .into_iter()
        .map(|s| s.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(schedules)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = SCHEDULE_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Schedule", body = ScheduleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let schedule = ScheduleService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}

/// Create a schedule.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - New schedule; status defaults to `Active`
#[utoipa::path(
    post,
    path = "/",
    tag = SCHEDULE_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateScheduleDto,
    responses(
        (status = 201, description = "Schedule created", body = ScheduleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let schedule = ScheduleService::new(&state.db)
        .create(
            &user,
            CreateScheduleParams {
                department: payload.department,
                class_count: payload.class_count,
                staff_count: payload.staff_count,
                status: payload.status.map(Into::into).unwrap_or_default(),
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(schedule.into_dto())))
}

/// Update the fields present in the body and bump `lastUpdated`.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/{id}",
    tag = SCHEDULE_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Schedule ID")),
    request_body = UpdateScheduleDto,
    responses(
        (status = 200, description = "Schedule updated", body = ScheduleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let schedule = ScheduleService::new(&state.db)
        .update(
            &user,
            id,
            UpdateScheduleParams {
                department: payload.department,
                class_count: payload.class_count,
                staff_count: payload.staff_count,
                status: payload.status.map(Into::into),
            },
        )
        .await?
        .ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}

/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = SCHEDULE_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Schedule ID")),
    responses(
        (status = 204, description = "Schedule deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    if !ScheduleService::new(&state.db).delete(&user, id).await? {
        return Err(not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
