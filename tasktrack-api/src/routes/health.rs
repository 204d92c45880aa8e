/// Health check endpoint
///
/// Reports whether the server is up and whether the task store answers the
/// pool's liveness probe. Public, unauthenticated.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "version": "0.1.0",
///   "database": "reachable"
/// }
/// ```

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tasktrack_shared::db::pool;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when the store answers the probe, `degraded` otherwise
    pub status: String,

    /// Application version
    pub version: String,

    /// `reachable` or `unreachable`
    pub database: String,
}

/// Health check handler
///
/// Runs the connection pool's liveness probe against the task store. A
/// probe failure is reported in the body, not as an error status; the
/// endpoint itself staying up is the point.
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let (status, database) = match pool::health_check(&state.db).await {
        Ok(()) => ("ok", "reachable"),
        Err(_) => ("degraded", "unreachable"),
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    }))
}
