/// Configuration management for the API server
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: SQLite connection string (default: `sqlite::memory:`)
/// - `API_HOST`: Host to bind to (default: 0.0.0.0)
/// - `API_PORT`: Port to bind to (default: 8080)
/// - `JWT_SECRET`: Secret key for JWT signing (default: a fixed development
///   value — must be overridden in production)
/// - `RUST_LOG`: Log level (default: info)
///
/// # Example
///
/// ```no_run
/// use tasktrack_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use std::env;
use tasktrack_shared::db::pool::DatabaseConfig;

/// Fixed development signing secret used when `JWT_SECRET` is unset
pub const DEV_JWT_SECRET: &str = "qwlehfiuqweuiofhqwei";

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database connection URL
    pub database_url: String,

    /// JWT configuration
    pub jwt: JwtConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Secret key for JWT signing
    pub secret: String,
}

impl JwtConfig {
    /// Whether the secret is the built-in development default
    pub fn is_dev_secret(&self) -> bool {
        self.secret == DEV_JWT_SECRET
    }
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// Every variable has a development default; none are required. A
    /// warning is logged when the default signing secret is in use.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable has an invalid value (e.g. a
    /// non-numeric `API_PORT`)
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let api_port = env::var("API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_string());

        let config = Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
            },
            database_url,
            jwt: JwtConfig { secret: jwt_secret },
        };

        if config.jwt.is_dev_secret() {
            tracing::warn!(
                "JWT_SECRET is not set; using the development default. \
                 Override it in production."
            );
        }

        Ok(config)
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }

    /// Builds the database pool configuration from this config
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database_url.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database_url: "sqlite::memory:".to_string(),
            jwt: JwtConfig {
                secret: "test-secret".to_string(),
            },
        }
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(test_config().bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_dev_secret_detection() {
        let mut config = test_config();
        assert!(!config.jwt.is_dev_secret());

        config.jwt.secret = DEV_JWT_SECRET.to_string();
        assert!(config.jwt.is_dev_secret());
    }

    #[test]
    fn test_database_config() {
        let db = test_config().database_config();
        assert_eq!(db.url, "sqlite::memory:");
        assert!(db.is_in_memory());
    }
}
