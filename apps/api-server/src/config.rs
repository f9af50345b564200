//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which resolves a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse_var = |key: &str| lookup(key).and_then(|s| s.parse::<u64>().ok());

        let database = lookup("DATABASE_URL").map(|url| {
            let defaults = DatabaseConfig::new(url);

            DatabaseConfig {
                max_connections: parse_var("DB_MAX_CONNECTIONS")
                    .and_then(|n| u32::try_from(n).ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: parse_var("DB_MIN_CONNECTIONS")
                    .and_then(|n| u32::try_from(n).ok())
                    .unwrap_or(defaults.min_connections),
                connect_timeout: parse_var("DB_CONNECT_TIMEOUT_SECS")
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.connect_timeout),
                ..defaults
            }
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var("PORT")
                .and_then(|n| u16::try_from(n).ok())
                .unwrap_or(4000),
            database,
        }
    }
}
