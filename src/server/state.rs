//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into each handler through Axum's state
//! extraction. Every field is cheap to clone: the connection is a pool, and the token service
//! and Google verifier share their internals.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::{google::GoogleVerifier, token::TokenService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Issues and validates access tokens.
    pub tokens: TokenService,

    /// Verifies Google ID tokens for `/auth/google`.
    pub google: GoogleVerifier,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService, google: GoogleVerifier) -> Self {
        Self { db, tokens, google }
    }
}
