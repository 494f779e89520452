/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * opening the SQLite database.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by `main` first), with defaults suitable for local development:
 *
 * | Variable           | Default                 |
 * |--------------------|-------------------------|
 * | `DATABASE_URL`     | `sqlite://rest_rant.db` |
 * | `SERVER_PORT`      | `3000`                  |
 * | `AUTH_STRATEGY`    | `session`               |
 * | `JWT_SECRET`       | required for `token`    |
 * | `TOKEN_TTL_DAYS`   | `30`                    |
 * | `SESSION_TTL_DAYS` | `7`                     |
 * | `SECURE_COOKIES`   | `false`                 |
 *
 * Sessions live in the same database as everything else, in the
 * `tower_sessions` table created by `load_database`.
 */

use std::str::FromStr;

use chrono::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;
use tower_sessions_sqlx_store::SqliteStore;

use crate::backend::auth::strategy::AuthStrategy;
use crate::backend::server::init::InitError;

const DEFAULT_DATABASE_URL: &str = "sqlite://rest_rant.db";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TOKEN_TTL_DAYS: i64 = 30;
const DEFAULT_SESSION_TTL_DAYS: i64 = 7;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite connection URL
    pub database_url: String,
    /// Port to listen on (all interfaces)
    pub port: u16,
    /// How logins establish an authenticated context
    pub auth_strategy: AuthStrategy,
    /// Token signing secret; only used by the token strategy
    pub jwt_secret: Option<String>,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    /// How long an unused session is kept
    pub session_ttl: Duration,
    /// Whether the session cookie is marked `Secure`
    pub secure_cookies: bool,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a key lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            builder = builder.port(parse_value("SERVER_PORT", &port)?);
        }
        if let Some(strategy) = lookup("AUTH_STRATEGY") {
            builder = builder.auth_strategy(strategy.parse()?);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(days) = lookup("TOKEN_TTL_DAYS") {
            builder = builder.token_ttl_days(parse_value("TOKEN_TTL_DAYS", &days)?);
        }
        if let Some(days) = lookup("SESSION_TTL_DAYS") {
            builder = builder.session_ttl_days(parse_value("SESSION_TTL_DAYS", &days)?);
        }
        if let Some(secure) = lookup("SECURE_COOKIES") {
            builder = builder.secure_cookies(parse_value("SECURE_COOKIES", &secure)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth_strategy == AuthStrategy::Token
            && self.jwt_secret.as_deref().map_or(true, str::is_empty)
        {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.token_ttl <= Duration::zero() {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_DAYS",
                value: self.token_ttl.num_days().to_string(),
            });
        }
        if self.session_ttl <= Duration::zero() {
            return Err(ConfigError::InvalidValue {
                key: "SESSION_TTL_DAYS",
                value: self.session_ttl.num_days().to_string(),
            });
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

/// Builder for ServerConfig
#[derive(Debug)]
pub struct ServerConfigBuilder {
    database_url: String,
    port: u16,
    auth_strategy: AuthStrategy,
    jwt_secret: Option<String>,
    token_ttl_days: i64,
    session_ttl_days: i64,
    secure_cookies: bool,
}

impl Default for ServerConfigBuilder {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            port: DEFAULT_PORT,
            auth_strategy: AuthStrategy::default(),
            jwt_secret: None,
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
            session_ttl_days: DEFAULT_SESSION_TTL_DAYS,
            secure_cookies: false,
        }
    }
}

impl ServerConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the authentication strategy
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = strategy;
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime in days
    pub fn token_ttl_days(mut self, days: i64) -> Self {
        self.token_ttl_days = days;
        self
    }

    /// Set how many days of inactivity end a session
    pub fn session_ttl_days(mut self, days: i64) -> Self {
        self.session_ttl_days = days;
        self
    }

    /// Mark the session cookie `Secure`
    pub fn secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            database_url: self.database_url,
            port: self.port,
            auth_strategy: self.auth_strategy,
            jwt_secret: self.jwt_secret,
            token_ttl: Duration::days(self.token_ttl_days),
            session_ttl: Duration::days(self.session_ttl_days),
            secure_cookies: self.secure_cookies,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

/// Open the SQLite database and apply migrations
///
/// This includes the session store's table.
///
/// The database file is created if it does not exist. In-memory databases
/// exist per connection, so they get a pool of exactly one connection that
/// is never recycled.
///
/// # Example
///
/// ```rust,no_run
/// use rest_rant::backend::server::config::load_database;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = load_database("sqlite::memory:").await?;
/// # Ok(())
/// # }
/// ```
pub async fn load_database(database_url: &str) -> Result<SqlitePool, InitError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new().connect_with(options).await?
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    SqliteStore::new(pool.clone()).migrate().await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
