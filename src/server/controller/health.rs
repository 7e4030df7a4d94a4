use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::{HealthDto, RootDto};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses((status = 200, description = "Service is up", body = HealthDto)),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "healthy".to_string(),
            version: VERSION.to_string(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses((status = 200, description = "Service banner", body = RootDto)),
)]
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(RootDto {
            message: "School Management API".to_string(),
            version: VERSION.to_string(),
            docs: "/api/docs".to_string(),
        }),
    )
}
