//! Store configuration loaded from the environment.
//!
//! - `TASKLIST_DATABASE_URL` - Required. `PostgreSQL` connection URL.
//! - `TASKLIST_POOL_SIZE` - Optional. Maximum pooled connections. Defaults to `4`.
//! - `TASKLIST_CONNECTION_TIMEOUT_SECS` - Optional. Seconds to wait for a
//!   pooled connection. Defaults to `30`.

use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the database URL.
pub const DATABASE_URL_VAR: &str = "TASKLIST_DATABASE_URL";
/// Environment variable holding the pool size.
pub const POOL_SIZE_VAR: &str = "TASKLIST_POOL_SIZE";
/// Environment variable holding the connection timeout in seconds.
pub const CONNECTION_TIMEOUT_VAR: &str = "TASKLIST_CONNECTION_TIMEOUT_SECS";

const DEFAULT_POOL_SIZE: u32 = 4;
const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("invalid value for {name}: {reason}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Parse failure description.
        reason: String,
    },
}

/// Connection settings for the task store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    database_url: String,
    pool_size: u32,
    connection_timeout: Duration,
}

impl StoreConfig {
    /// Creates a configuration with default pool settings.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            pool_size: DEFAULT_POOL_SIZE,
            connection_timeout: Duration::from_secs(DEFAULT_CONNECTION_TIMEOUT_SECS),
        }
    }

    /// Sets the maximum pool size.
    #[must_use]
    pub const fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Sets the pooled connection timeout.
    #[must_use]
    pub const fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Loads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when the database URL is unset
    /// and [`ConfigError::InvalidValue`] when a numeric variable is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingEnvVar(DATABASE_URL_VAR))?;

        let pool_size = match lookup(POOL_SIZE_VAR) {
            Some(raw) => parse_var::<u32>(POOL_SIZE_VAR, &raw)?,
            None => DEFAULT_POOL_SIZE,
        };
        if pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                name: POOL_SIZE_VAR,
                reason: "pool size must be at least 1".to_owned(),
            });
        }

        let timeout_secs = match lookup(CONNECTION_TIMEOUT_VAR) {
            Some(raw) => parse_var::<u64>(CONNECTION_TIMEOUT_VAR, &raw)?,
            None => DEFAULT_CONNECTION_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            pool_size,
            connection_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Returns the database URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the maximum pool size.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }

    /// Returns the pooled connection timeout.
    #[must_use]
    pub const fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }
}

fn parse_var<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|err| ConfigError::InvalidValue {
            name,
            reason: err.to_string(),
        })
}
