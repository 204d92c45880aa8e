//! # Database bootstrap command
//!
//! Wipes and recreates all storage, then seeds the administrative user.
//! Equivalent of a `create_db` management command:
//!
//! ```bash
//! DATABASE_URL=sqlite://tasktrack.db cargo run -p tasktrack-api --bin create-db
//! ```
//!
//! Every task and every user is destroyed. Only useful against a
//! file-backed database; an in-memory store does not outlive the process.

use tasktrack_api::config::Config;
use tasktrack_shared::db::{
    pool::{close_pool, create_pool},
    schema,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "create_db=info,tasktrack_shared=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    if config.database_config().is_in_memory() {
        tracing::warn!("DATABASE_URL is in-memory; the bootstrapped data will not persist");
    }

    let pool = create_pool(config.database_config()).await?;

    schema::bootstrap(&pool).await?;

    tracing::info!(
        username = schema::ADMIN_USERNAME,
        "Database recreated and admin user seeded"
    );

    close_pool(pool).await;

    Ok(())
}
