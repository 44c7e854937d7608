use std::str::FromStr;

use crate::error::config::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://fastbreak.db?mode=rwc";

const DEFAULT_RATE_LIMIT_MS: u64 = 1000;
const DEFAULT_REQUESTS_PER_MINUTE: u32 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Overrides the provider base URL; mainly for tests and proxies.
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    /// Minimum delay between consecutive provider requests, in ms.
    pub rate_limit_ms: u64,
    pub requests_per_minute: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: optional_env("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            api_base_url: optional_env("NBA_API_BASE_URL"),
            api_key: optional_env("NBA_API_KEY"),
            access_token: optional_env("NBA_ACCESS_TOKEN"),
            rate_limit_ms: parse_var(
                "NBA_RATE_LIMIT_MS",
                optional_env("NBA_RATE_LIMIT_MS"),
                DEFAULT_RATE_LIMIT_MS,
            )?,
            requests_per_minute: parse_var(
                "NBA_REQUESTS_PER_MINUTE",
                optional_env("NBA_REQUESTS_PER_MINUTE"),
                DEFAULT_REQUESTS_PER_MINUTE,
            )?,
        })
    }
}

/// Read an environment variable, treating empty values as unset.
fn optional_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(var: &str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: format!("could not parse {raw:?}"),
            }),
        None => Ok(default),
    }
}
