//! Google ID token verification through the tokeninfo endpoint.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::GoogleIdentity,
};

const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Fields of the tokeninfo response the login flow needs. Google encodes numbers as strings.
#[derive(Debug, Deserialize)]
struct TokenInfo {
    iss: String,
    aud: String,
    sub: String,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
    exp: String,
}

/// Verifies ID tokens minted by Google Sign-In for one of the configured clients.
#[derive(Clone)]
pub struct GoogleVerifier {
    http_client: reqwest::Client,
    tokeninfo_url: Url,
    client_ids: Arc<Vec<String>>,
}

impl GoogleVerifier {
    pub fn new(http_client: reqwest::Client, tokeninfo_url: Url, client_ids: Vec<String>) -> Self {
        Self {
            http_client,
            tokeninfo_url,
            client_ids: Arc::new(client_ids),
        }
    }

    /// Asks Google to validate the token's signature, then checks issuer, audience and expiry.
    ///
    /// # Returns
    /// - `Ok(GoogleIdentity)` - Google account the token belongs to
    /// - `Err(AuthError::GoogleTokenRejected)` - Token invalid for this application
    /// - `Err(AppError::ReqwestErr)` - Google could not be reached
    pub async fn verify(&self, id_token: &str) -> Result<GoogleIdentity, AppError> {
        if self.client_ids.is_empty() {
            return Err(rejected("Invalid token: Google sign-in is not configured"));
        }

        let response = self
            .http_client
            .get(self.tokeninfo_url.clone())
            .query(&[("id_token", id_token)])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!("Google tokeninfo returned {}", response.status());
            return Err(rejected("Invalid token: rejected by Google"));
        }

        let info: TokenInfo = response
            .json()
            .await
            .map_err(|_| rejected("Invalid token: malformed token info"))?;

        if !self.client_ids.iter().any(|id| *id == info.aud) {
            return Err(rejected("Invalid token: wrong audience"));
        }

        if !GOOGLE_ISSUERS.contains(&info.iss.as_str()) {
            return Err(rejected("Invalid token issuer"));
        }

        let exp = info
            .exp
            .parse::<i64>()
            .map_err(|_| rejected("Invalid token: malformed expiry"))?;
        if exp < Utc::now().timestamp() {
            return Err(rejected("Invalid token: token expired"));
        }

        let email = info
            .email
            .ok_or_else(|| rejected("Invalid token: email missing"))?;

        Ok(GoogleIdentity {
            google_id: info.sub,
            email,
            name: info.name.unwrap_or_default(),
            avatar: info.picture,
        })
    }
}

fn rejected(message: &str) -> AppError {
    AuthError::GoogleTokenRejected(message.to_string()).into()
}
