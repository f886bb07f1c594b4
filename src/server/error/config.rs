use thiserror::Error;

/// Errors raised while loading application configuration at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is missing or unreadable.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `DEFAULT_TIMEZONE` is not a valid IANA timezone name.
    #[error("invalid IANA timezone name: {0}")]
    InvalidTimeZone(String),
}
