use std::env;

use thiserror::Error;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_PROGRESS_API_URL: &str = "http://127.0.0.1:8080/api/demo-progress";

/// Progress URL on loopback at the port the server binds to.
fn local_progress_api_url(bind_address: &str) -> String {
    match bind_address.rsplit_once(':') {
        Some((_, port)) if port.parse::<u16>().is_ok() => {
            format!("http://127.0.0.1:{port}/api/demo-progress")
        }
        _ => DEFAULT_PROGRESS_API_URL.to_string(),
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: String,
    pub max_connections: u32,
    pub progress_api_url: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenv().ok()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    name: "DATABASE_MAX_CONNECTIONS",
                    value: raw,
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into());
        let progress_api_url = lookup("PROGRESS_API_URL")
            .unwrap_or_else(|| local_progress_api_url(&bind_address));

        Ok(Self {
            database_url,
            bind_address,
            max_connections,
            progress_api_url,
        })
    }
}
