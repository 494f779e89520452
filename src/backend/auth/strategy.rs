//! Authentication strategies
//!
//! A login establishes an authenticated context in exactly one way, chosen by
//! configuration:
//!
//! - **`session`** - the user id is stored in the server-side session; the
//!   client holds only the session cookie.
//! - **`token`** - a signed bearer token carrying the user id is returned in
//!   the login response and sent back in the `Authorization` header.
//!
//! [`Authenticator`] is the only place that knows which one is active.

use std::fmt;
use std::str::FromStr;

use axum::http::{header::AUTHORIZATION, HeaderMap};
use tower_sessions::Session;

use crate::backend::auth::tokens::TokenKeys;
use crate::backend::error::BackendError;
use crate::backend::server::config::{ConfigError, ServerConfig};

/// Key for storing the user id in the session
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Configured authentication strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthStrategy {
    #[default]
    Session,
    Token,
}

impl FromStr for AuthStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "session" => Ok(Self::Session),
            "token" | "jwt" => Ok(Self::Token),
            _ => Err(ConfigError::InvalidValue {
                key: "AUTH_STRATEGY",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AuthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session => f.write_str("session"),
            Self::Token => f.write_str("token"),
        }
    }
}

/// Establishes and resolves authenticated contexts
#[derive(Debug, Clone)]
pub enum Authenticator {
    Session,
    Token(TokenKeys),
}

impl Authenticator {
    /// Build the authenticator for the configured strategy.
    ///
    /// The config is validated again here, so one assembled by hand cannot
    /// produce token keys with an empty secret.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        match config.auth_strategy {
            AuthStrategy::Session => Ok(Self::Session),
            AuthStrategy::Token => {
                let secret = config
                    .jwt_secret
                    .as_deref()
                    .filter(|secret| !secret.is_empty())
                    .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
                Ok(Self::Token(TokenKeys::new(secret, config.token_ttl)))
            }
        }
    }

    pub fn strategy(&self) -> AuthStrategy {
        match self {
            Self::Session => AuthStrategy::Session,
            Self::Token(_) => AuthStrategy::Token,
        }
    }

    /// Record a successful login.
    ///
    /// Returns the bearer token for the token strategy, `None` otherwise.
    /// The session id is cycled on login so a pre-login id cannot be reused.
    pub async fn establish(
        &self,
        session: &Session,
        user_id: i64,
    ) -> Result<Option<String>, BackendError> {
        match self {
            Self::Session => {
                session.cycle_id().await?;
                session.insert(SESSION_USER_ID_KEY, user_id).await?;
                Ok(None)
            }
            Self::Token(keys) => Ok(Some(keys.create_token(user_id)?)),
        }
    }

    /// Find the user id the request's credentials point at, if any.
    ///
    /// Invalid, expired or missing credentials all resolve to `None`.
    pub async fn resolve_user_id(&self, session: &Session, headers: &HeaderMap) -> Option<i64> {
        match self {
            Self::Session => match session.get::<i64>(SESSION_USER_ID_KEY).await {
                Ok(user_id) => user_id,
                Err(e) => {
                    tracing::warn!("Failed to read session: {:?}", e);
                    None
                }
            },
            Self::Token(keys) => {
                let token = bearer_token(headers)?;
                match keys.verify_token(token) {
                    Ok(claims) => Some(claims.id),
                    Err(e) => {
                        tracing::warn!("Invalid token: {:?}", e);
                        None
                    }
                }
            }
        }
    }

    /// End the authenticated context.
    ///
    /// Tokens are stateless, so for the token strategy this does nothing;
    /// clients drop the token.
    pub async fn end(&self, session: &Session) -> Result<(), BackendError> {
        if let Self::Session = self {
            session.flush().await?;
        }
        Ok(())
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
