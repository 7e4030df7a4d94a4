use std::net::SocketAddr;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";
const DEFAULT_APP_NAME: &str = "Next Step API";
const DEFAULT_REDIS_URL: &str = "redis://localhost:6379/0";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_TOKEN_MINUTES: i64 = 60 * 24;

pub struct Config {
    pub app_name: String,
    pub debug: bool,
    pub bind_addr: SocketAddr,

    pub database_url: String,
    /// Broker URL for background workers. Read so deployments can share one `.env`.
    pub redis_url: String,

    pub secret_key: String,
    pub access_token_expire_minutes: i64,

    /// Accepted OAuth client ids (web, iOS, Android).
    pub google_client_ids: Vec<String>,
    pub google_tokeninfo_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value of a variable, `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsable
    /// - `Err(AppError::ConfigErr)` - Missing or unparsable variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let debug = match lookup("DEBUG") {
            Some(value) => parse_bool("DEBUG", &value)?,
            None => false,
        };

        let bind_addr = parse_var(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let access_token_expire_minutes = parse_var(
            &lookup,
            "ACCESS_TOKEN_EXPIRE_MINUTES",
            &DEFAULT_TOKEN_MINUTES.to_string(),
        )?;
        let google_tokeninfo_url =
            parse_var(&lookup, "GOOGLE_TOKENINFO_URL", GOOGLE_TOKENINFO_URL)?;

        let google_client_ids = lookup("GOOGLE_CLIENT_ID")
            .map(|ids| {
                ids.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            app_name: lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            debug,
            bind_addr,
            database_url: required("DATABASE_URL")?,
            redis_url: lookup("REDIS_URL").unwrap_or_else(|| DEFAULT_REDIS_URL.to_string()),
            secret_key: required("SECRET_KEY")?,
            access_token_expire_minutes,
            google_client_ids,
            google_tokeninfo_url,
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let value = lookup(name).unwrap_or_else(|| default.to_string());

    value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
