//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error every handler returns. Domain errors (`AuthError`,
//! `ConfigError`, `InternalError`) convert into it with `?`, and `IntoResponse` maps each
//! variant onto a status code with a `{"detail": "..."}` body.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for its own status mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client error while talking to Google.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Socket error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body or query failed validation. Results in 422 Unprocessable Entity.
    #[error(transparent)]
    Validation(#[from] validator::ValidationErrors),

    /// Body is not JSON, or does not match the expected shape.
    ///
    /// Keeps axum's status: 400 for syntax errors, 415 without a JSON content type and 422
    /// for missing or mistyped fields.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Query string does not deserialize. Results in 422 Unprocessable Entity.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// Path segment does not deserialize, e.g. a non-numeric id. Results in 422.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// Invariant broken inside the application. Logged, then reported as a generic 500.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found. Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Authenticated but not allowed. Results in 403 Forbidden with the provided message.
    #[error("{0}")]
    Forbidden(String),
}

/// Maps application errors onto HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `BadRequest`
/// - 403 Forbidden - `Forbidden`
/// - 404 Not Found - `NotFound`
/// - 422 Unprocessable Entity - `Validation`, `QueryRejection`, `PathRejection`
/// - Axum's status - `JsonRejection` (400, 415 or 422)
/// - Variable - `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - everything else, with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { detail: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { detail: msg })).into_response()
            }
            Self::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { detail: msg })).into_response()
            }
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                (
                    rejection.status(),
                    Json(ErrorDto {
                        detail: rejection.body_text(),
                    }),
                )
                    .into_response()
            }
            Self::QueryRejection(rejection) => unprocessable(rejection.body_text()),
            Self::PathRejection(rejection) => unprocessable(rejection.body_text()),
            Self::Validation(errors) => {
                tracing::debug!("Request validation failed: {}", errors);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorDto {
                        detail: errors.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn unprocessable(detail: String) -> Response {
    tracing::debug!("Rejected request: {}", detail);
    (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorDto { detail })).into_response()
}

/// Wrapper turning any displayable error into a logged 500 response.
///
/// The client only ever sees "Internal server error".
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                detail: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
