use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        dashboard::{ActivityDto, DashboardStatsDto},
    },
    server::{
        controller::extract::QueryParams,
        controller::param::ActivityParam, error::AppError, middleware::auth::AuthGuard,
        service::dashboard::DashboardService, state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Headline counters for the dashboard.
#[utoipa::path(
    get,
    path = "/stats",
    tag = DASHBOARD_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard counters", body = DashboardStatsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let stats = DashboardService::new(&state.db)
        .get_stats(Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Most recent activity entries, newest first.
#[utoipa::path(
    get,
    path = "/activity",
    tag = DASHBOARD_TAG,
    security(("bearer_auth" = [])),
    params(ActivityParam),
    responses(
        (status = 200, description = "Recent activity", body = Vec<ActivityDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    QueryParams(params): QueryParams<ActivityParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    params.validate()?;

    let activity: Vec<ActivityDto> = DashboardService::new(&state.db)
        .get_recent_activity(params.limit)
        .await?
        .into_iter()
        .map(|a| a.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(activity)))
}
