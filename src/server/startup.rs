use std::time::Duration;

use crate::server::{
    config::Config,
    error::AppError,
    service::auth::{google::GoogleVerifier, token::TokenService},
    state::AppState,
};

/// Connects to the database and runs pending migrations.
///
/// SQL statement logging follows `config.debug`.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect or migrate
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(config.debug);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied");

    Ok(db)
}

/// HTTP client for Google's tokeninfo endpoint.
///
/// Redirects are disabled so the token is only ever sent to the configured host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(10))
        .build()?;

    Ok(client)
}

/// Builds the shared state from the configuration and an open database.
pub fn build_state(
    config: &Config,
    db: sea_orm::DatabaseConnection,
) -> Result<AppState, AppError> {
    let tokens = TokenService::new(&config.secret_key, config.access_token_expire_minutes);
    let google = GoogleVerifier::new(
        setup_reqwest_client()?,
        config.google_tokeninfo_url.clone(),
        config.google_client_ids.clone(),
    );

    if config.google_client_ids.is_empty() {
        tracing::warn!("GOOGLE_CLIENT_ID is not set, Google sign-in will reject every token");
    }

    // Only the host is logged; the URL may carry credentials.
    let broker_host = url::Url::parse(&config.redis_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string));
    tracing::debug!(
        "Broker at {} is configured but no background workers run in this process",
        broker_host.as_deref().unwrap_or("<unparsable REDIS_URL>")
    );

    Ok(AppState::new(db, tokens, google))
}
