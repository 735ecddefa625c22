//! Server configuration loaded from environment variables.
//!
//! # Environment Profiles
//!
//! `APP_ENV_TYPE` selects the environment profile (`dev`, `test`, `live`) and
//! must be set before the server starts; a missing or unknown value is fatal.
//! The profile picks which dotenv files are loaded from `config/`:
//!
//! - `config/<profile>.env`
//! - `config/<profile>.credential.env`
//!
//! Both files are optional; variables already present in the real environment
//! always win.
//!
//! # Environment Variables
//!
//! ## Required
//! - `APP_ENV_TYPE` - environment profile (`dev`, `test`, `live`)
//! - `APP_DB_HOST` - `PostgreSQL` host
//! - `APP_DB_USER` - `PostgreSQL` user
//! - `APP_DB_PASSWORD` - `PostgreSQL` password
//! - `APP_DB_NAME` - database name
//!
//! ## Optional
//! - `APP_DB_PORT` - database port (default: 5432)
//! - `APP_DB_MAX_CONNECTIONS` - pool upper bound (default: 5)
//! - `APP_DB_MIN_CONNECTIONS` - idle connections kept warm (default: 2)
//! - `APP_HOST` - bind address (default: 127.0.0.1)
//! - `APP_PORT` - listen port (default: 8000)

use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Environment profile selected by `APP_ENV_TYPE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Test,
    Live,
}

impl Environment {
    /// Read the profile from `APP_ENV_TYPE`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the variable is absent or names an unknown
    /// profile. Callers treat this as fatal: the server must not start
    /// without knowing which environment it is in.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("APP_ENV_TYPE")
            .map_err(|_| ConfigError::MissingEnvVar("APP_ENV_TYPE".to_string()))?;
        raw.parse()
    }

    /// The lowercase profile name, used in dotenv file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Live => "live",
        }
    }

    /// Load the profile's dotenv files from `config/`.
    ///
    /// Missing files are tolerated; variables already set in the process
    /// environment are never overridden.
    pub fn load_env_files(self) {
        let dir = Path::new("config");
        let _ = dotenvy::from_path(dir.join(format!("{}.env", self.as_str())));
        let _ = dotenvy::from_path(dir.join(format!("{}.credential.env", self.as_str())));
    }
}

impl std::str::FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "test" => Ok(Self::Test),
            "live" => Ok(Self::Live),
            other => Err(ConfigError::InvalidEnvVar(
                "APP_ENV_TYPE".to_string(),
                format!("unknown profile '{other}' (expected dev, test or live)"),
            )),
        }
    }
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// `PostgreSQL` host.
    pub host: String,
    /// `PostgreSQL` port.
    pub port: u16,
    /// Database user.
    pub user: String,
    /// Database password.
    pub password: SecretString,
    /// Database name.
    pub database: String,
    /// Pool upper bound.
    pub max_connections: u32,
    /// Idle connections the pool keeps warm.
    pub min_connections: u32,
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Active environment profile.
    pub environment: Environment,
    /// Database settings.
    pub db: DbConfig,
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `APP_ENV_TYPE` first, loads that profile's dotenv files, then
    /// resolves the remaining variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let environment = Environment::from_env()?;
        environment.load_env_files();

        let host = get_env_or_default("APP_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("APP_HOST".to_string(), e.to_string()))?;
        let port = parse_env_or_default("APP_PORT", 8000)?;

        Ok(Self {
            environment,
            db: DbConfig::from_env()?,
            host,
            port,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl DbConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            host: get_required_env("APP_DB_HOST")?,
            port: parse_env_or_default("APP_DB_PORT", 5432)?,
            user: get_required_env("APP_DB_USER")?,
            password: SecretString::from(get_required_env("APP_DB_PASSWORD")?),
            database: get_required_env("APP_DB_NAME")?,
            max_connections: parse_env_or_default("APP_DB_MAX_CONNECTIONS", 5)?,
            min_connections: parse_env_or_default("APP_DB_MIN_CONNECTIONS", 2)?,
        };
        validate_pool_sizes(config.min_connections, config.max_connections)?;
        Ok(config)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required, non-empty environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    let value = std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))?;
    if value.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "cannot be empty".to_string(),
        ));
    }
    Ok(value)
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable parsed into `T`, with a default.
fn parse_env_or_default<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

/// Pool sizing sanity check: at least one connection, minimum never above
/// maximum.
fn validate_pool_sizes(min: u32, max: u32) -> Result<(), ConfigError> {
    if max == 0 {
        return Err(ConfigError::InvalidEnvVar(
            "APP_DB_MAX_CONNECTIONS".to_string(),
            "must be at least 1".to_string(),
        ));
    }
    if min > max {
        return Err(ConfigError::InvalidEnvVar(
            "APP_DB_MIN_CONNECTIONS".to_string(),
            format!("minimum ({min}) exceeds maximum ({max})"),
        ));
    }
    Ok(())
}
