/// Database schema management
///
/// This module creates and tears down the two tables the service uses.
/// There is no migration history: the schema is small enough that the
/// bootstrap command simply drops and recreates everything.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT NOT NULL,
///     email TEXT NOT NULL,
///     text TEXT,
///     complete BOOLEAN NOT NULL DEFAULT FALSE
/// );
///
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT NOT NULL,
///     password TEXT NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use tasktrack_shared::db::pool::{create_pool, DatabaseConfig};
/// use tasktrack_shared::db::schema;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// // Wipe everything and seed the admin user
/// schema::bootstrap(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::SqlitePool;
use tracing::info;

use crate::models::user::{CreateUser, User};

/// Username seeded by [`bootstrap`]
pub const ADMIN_USERNAME: &str = "admin";

/// Password seeded by [`bootstrap`]
///
/// Passwords are stored in plaintext throughout this service. Change the
/// seed before exposing a real deployment.
pub const ADMIN_PASSWORD: &str = "123";

/// Creates the `tasks` and `users` tables if they do not exist
///
/// Safe to run on every startup; existing tables are left untouched.
///
/// # Errors
///
/// Returns an error if a DDL statement fails
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL,
            email TEXT NOT NULL,
            text TEXT,
            complete BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Drops both tables
///
/// # Errors
///
/// Returns an error if a DDL statement fails
pub async fn drop_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("DROP TABLE IF EXISTS tasks").execute(pool).await?;
    sqlx::query("DROP TABLE IF EXISTS users").execute(pool).await?;
    Ok(())
}

/// Wipes and recreates all storage, then seeds the administrative user
///
/// This is the administrative bootstrap operation: every task and every
/// user is destroyed, and a single `admin` login is created.
///
/// # Errors
///
/// Returns an error if any statement fails
pub async fn bootstrap(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Recreating database schema");

    drop_schema(pool).await?;
    create_schema(pool).await?;

    let admin = User::create(
        pool,
        CreateUser {
            username: ADMIN_USERNAME.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        },
    )
    .await?;

    info!(user_id = admin.id, username = %admin.username, "Seeded admin user");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::{create_pool, DatabaseConfig};
    use crate::models::task::{CreateTask, Task, TaskFilter};

    async fn test_pool() -> SqlitePool {
        create_pool(DatabaseConfig::default()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_schema_is_idempotent() {
        let pool = test_pool().await;
        create_schema(&pool).await.unwrap();
        create_schema(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_bootstrap_seeds_admin() {
        let pool = test_pool().await;
        bootstrap(&pool).await.unwrap();

        let admin = User::find_by_username(&pool, ADMIN_USERNAME)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(admin.password, ADMIN_PASSWORD);
    }

    #[tokio::test]
    async fn test_bootstrap_wipes_tasks() {
        let pool = test_pool().await;
        bootstrap(&pool).await.unwrap();

        Task::create(
            &pool,
            CreateTask {
                username: "bob".to_string(),
                email: "b@x.com".to_string(),
                text: Some("buy milk".to_string()),
            },
        )
        .await
        .unwrap();

        bootstrap(&pool).await.unwrap();

        let count = Task::count(&pool, &TaskFilter::default()).await.unwrap();
        assert_eq!(count, 0);
    }
}
