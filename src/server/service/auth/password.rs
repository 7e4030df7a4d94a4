//! Argon2id password hashing.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::RngCore;

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a password with Argon2id and a random 16 byte salt.
///
/// Runs on the blocking pool so request workers are not stalled by the key derivation.
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash, safe to store
/// - `Err(AppError::InternalErr)` - Salt encoding or hashing failed
pub async fn hash_password(password: &str) -> Result<String, AppError> {
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || hash_blocking(&password))
        .await
        .map_err(InternalError::BlockingTask)?
}

/// Checks a password against a stored hash on the blocking pool.
///
/// # Returns
/// - `Ok(true)` / `Ok(false)` - Whether the password matches
/// - `Err(AppError::InternalErr)` - Stored hash is not a valid PHC string
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let password = password.to_owned();
    let hash = hash.to_owned();

    tokio::task::spawn_blocking(move || verify_blocking(&password, &hash))
        .await
        .map_err(InternalError::BlockingTask)?
}

fn hash_blocking(password: &str) -> Result<String, AppError> {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

fn verify_blocking(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
