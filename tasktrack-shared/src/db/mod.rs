/// Database layer for TaskTrack
///
/// This module provides database connection pooling and schema management.
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with health checks
/// - `schema`: Table creation, teardown, and the admin seed
/// - Models are in the `models` module at crate root level
///
/// # Example
///
/// ```no_run
/// use tasktrack_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     Ok(())
/// }
/// ```

pub mod pool;
pub mod schema;
