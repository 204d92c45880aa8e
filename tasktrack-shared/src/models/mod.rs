/// Database models for TaskTrack
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `task`: Task records tracked by the service
/// - `user`: Login credentials used solely for authentication
///
/// # Example
///
/// ```no_run
/// use tasktrack_shared::models::task::{Task, CreateTask};
/// use tasktrack_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(&pool, CreateTask {
///     username: "bob".to_string(),
///     email: "b@x.com".to_string(),
///     text: Some("buy milk".to_string()),
/// }).await?;
/// # Ok(())
/// # }
/// ```

pub mod task;
pub mod user;
