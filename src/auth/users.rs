/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. Functions take
 * `impl PgExecutor` so they run equally against the pool or inside the
 * registration transaction.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use uuid::Uuid;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique, 3-30 chars)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// User email address
    pub email: String,
    /// Avatar reference (URL or path; empty if unset)
    pub user_img: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new user
pub async fn create_user<'a>(
    executor: impl PgExecutor<'a>,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, email, user_img, created_at, updated_at)
        VALUES ($1, $2, $3, $4, '', $5, $6)
        RETURNING id, username, password_hash, email, user_img, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(email)
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await
}

/// Get user by username, `None` if not registered
pub async fn get_user_by_username<'a>(
    executor: impl PgExecutor<'a>,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, email, user_img, created_at, updated_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(executor)
    .await
}

/// Get user by email, `None` if not registered
pub async fn get_user_by_email<'a>(
    executor: impl PgExecutor<'a>,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, email, user_img, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(executor)
    .await
}

/// Replace the password hash for the user owning `email`
///
/// Returns the number of rows updated (0 when the email is unknown).
pub async fn update_password_by_email<'a>(
    executor: impl PgExecutor<'a>,
    email: &str,
    password_hash: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET password_hash = $1, updated_at = $2
        WHERE email = $3
        "#,
    )
    .bind(password_hash)
    .bind(Utc::now())
    .bind(email)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
