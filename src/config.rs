use std::{env, fmt::Display, str::FromStr, time::Duration};

use thiserror::Error;
use tracing::info;

use crate::scrape::DEFAULT_USER_AGENT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    Missing(&'static str),
    #[error("invalid {key} value: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub token_ttl: chrono::Duration,
    pub scrape_user_agent: String,
    pub scrape_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            jwt_secret: require("JWT_SECRET")?,
            port: try_load("PORT", "8787")?,
            token_ttl: chrono::Duration::seconds(try_load("TOKEN_TTL_SECS", "3600")?),
            scrape_user_agent: env::var("SCRAPE_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            scrape_timeout: Duration::from_secs(try_load("SCRAPE_TIMEOUT_SECS", "10")?),
        })
    }
}

fn require(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
        })
}
