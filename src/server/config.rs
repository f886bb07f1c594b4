use chrono_tz::Tz;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TIME_ZONE: &str = "UTC";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// IANA timezone used when a tenant's settings are lazily created.
    pub default_time_zone: Tz,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let default_time_zone = std::env::var("DEFAULT_TIMEZONE")
            .unwrap_or_else(|_| DEFAULT_TIME_ZONE.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            default_time_zone: default_time_zone
                .parse::<Tz>()
                .map_err(|_| ConfigError::InvalidTimeZone(default_time_zone))?,
        })
    }
}
