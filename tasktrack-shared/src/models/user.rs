/// User model and database operations
///
/// This module provides the User model used solely for authentication.
/// Users are created by the administrative bootstrap; no exposed operation
/// updates or deletes them.
///
/// Passwords are stored and compared in plaintext, with no hashing
/// anywhere in the service. Do not reuse this model anywhere that handles
/// real credentials.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT NOT NULL,
///     password TEXT NOT NULL
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User model representing a login credential record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user id (autoincrement)
    pub id: i64,

    /// Login identity; not declared unique but treated as such by lookup
    pub username: String,

    /// Plaintext password (see module docs)
    pub password: String,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login identity
    pub username: String,

    /// Plaintext password
    pub password: String,
}

impl User {
    /// Creates a new user in the database
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password)
            VALUES (?, ?)
            RETURNING id, username, password
            "#,
        )
        .bind(data.username)
        .bind(data.password)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by exact username match
    ///
    /// Returns the first matching user if any. Usernames are treated as
    /// unique even though the schema does not declare them so.
    pub async fn find_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password
            FROM users
            WHERE username = ?
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Checks the supplied password against the stored one
    ///
    /// Plain equality, no hashing (see module docs).
    pub fn password_matches(&self, password: &str) -> bool {
        self.password == password
    }
}
