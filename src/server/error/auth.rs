use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected route.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Token failed signature or expiry validation.
    #[error("Failed to decode access token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Token decoded but its `sub` claim is not a user id.
    #[error("Access token subject '{0}' is not a user id")]
    InvalidTokenPayload(String),

    /// Token is valid but the user it names no longer exists.
    #[error("User {0} from access token not found in database")]
    UserNotInDatabase(i32),

    /// User lacks the permission the route requires.
    ///
    /// # Fields
    /// - User id
    /// - Description of what was attempted, logged at debug level only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Unknown email, Google-only account or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration with an email that already has an account.
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    /// Google ID token rejected. The message is returned to the client as is.
    #[error("{0}")]
    GoogleTokenRejected(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - Token problems and unknown users → 401 Unauthorized; decode failures also carry
///   `WWW-Authenticate: Bearer`
/// - `AccessDenied` → 403 Forbidden with "Admin access required"
/// - `EmailAlreadyRegistered` → 400 Bad Request
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken => unauthorized("Not authenticated"),
            Self::InvalidToken(_) => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(ErrorDto {
                    detail: "Invalid or expired token".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidTokenPayload(_) => unauthorized("Invalid token payload"),
            Self::UserNotInDatabase(_) => unauthorized("User not found"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    detail: "Admin access required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => unauthorized("Invalid email or password"),
            Self::EmailAlreadyRegistered => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    detail: "Email already registered".to_string(),
                }),
            )
                .into_response(),
            Self::GoogleTokenRejected(msg) => unauthorized(&msg),
        }
    }
}

fn unauthorized(detail: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorDto {
            detail: detail.to_string(),
        }),
    )
        .into_response()
}
