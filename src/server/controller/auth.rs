use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        auth::{GoogleLoginDto, LoginDto, RegisterDto, TokenDto},
        user::UserDto,
    },
    server::{
        controller::extract::JsonBody,
        error::AppError,
        middleware::auth::AuthGuard,
        model::auth::RegisterParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a password account.
///
/// The role defaults to `STUDENT` when omitted.
///
/// # Returns
/// - `201 Created` - Registered user
/// - `400 Bad Request` - Email already registered
/// - `422 Unprocessable Entity` - Invalid email
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Email already registered", body = ErrorDto),
        (status = 422, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthService::new(&state.db, &state.tokens)
        .register(RegisterParams {
            name: payload.name,
            email: payload.email,
            password: payload.password,
            department: payload.department,
            role: payload.role.map(Into::into).unwrap_or_default(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Access token and user
/// - `401 Unauthorized` - Unknown email, Google-only account or wrong password
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 422, description = "Invalid request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let session = AuthService::new(&state.db, &state.tokens)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}

/// Log in with a Google ID token.
///
/// Links the Google account to an existing user with the same email, or creates a student
/// account on first sign-in.
///
/// # Returns
/// - `200 OK` - Access token and user
/// - `401 Unauthorized` - Token rejected
#[utoipa::path(
    post,
    path = "/google",
    tag = AUTH_TAG,
    request_body = GoogleLoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 401, description = "Google token rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn google_login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<GoogleLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = state.google.verify(&payload.id_token).await?;

    let session = AuthService::new(&state.db, &state.tokens)
        .login_with_google(identity)
        .await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}

/// Get the current user.
#[utoipa::path(
    get,
    path = "/me",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
