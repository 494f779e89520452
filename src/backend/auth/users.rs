/**
 * User Model and Database Operations
 *
 * Users are created out of band (operators, fixtures); the HTTP API only
 * looks them up. [`User`] carries the password digest and must never be
 * serialized to a client: convert it to [`PublicUser`] first.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::shared::PublicUser;

/// User row as stored in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Generated user ID
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Login key (unique)
    pub email: String,
    /// bcrypt digest of the password
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Client-safe view of this user
    pub fn to_public(&self) -> PublicUser {
        PublicUser::from(self)
    }
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        PublicUser {
            user_id: user.user_id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Data for a user that does not exist yet
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    /// Already-hashed password
    pub password_digest: String,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `new_user` - Profile fields and password digest
///
/// # Returns
/// Created user or error (a duplicate email violates the unique constraint)
pub async fn create_user(pool: &SqlitePool, new_user: NewUser) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (first_name, last_name, email, password_digest, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING user_id, first_name, last_name, email, password_digest, created_at, updated_at
        "#,
    )
    .bind(&new_user.first_name)
    .bind(&new_user.last_name)
    .bind(&new_user.email)
    .bind(&new_user.password_digest)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::info!("Created user {}", user.user_id);
    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT user_id, first_name, last_name, email, password_digest, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, user_id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT user_id, first_name, last_name, email, password_digest, created_at, updated_at
        FROM users
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
