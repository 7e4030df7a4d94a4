use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password or parse a stored hash.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// A blocking task panicked or was cancelled before returning.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[source] tokio::task::JoinError),

    /// Signing an access token failed.
    #[error("Failed to encode access token: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),

    /// A row written inside the current request could not be read back.
    #[error("{entity} {id} missing right after it was written")]
    MissingAfterWrite { entity: &'static str, id: i32 },
}
