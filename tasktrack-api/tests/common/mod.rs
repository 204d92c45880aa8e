/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - In-memory test database setup
/// - Test user creation
/// - JWT token generation
/// - Request/response helpers

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use tasktrack_api::app::{build_router, AppState};
use tasktrack_api::config::{ApiConfig, Config, JwtConfig};
use tasktrack_shared::auth::jwt::{create_token, Claims};
use tasktrack_shared::db::pool::{create_pool, DatabaseConfig};
use tasktrack_shared::db::schema;
use tasktrack_shared::models::user::{CreateUser, User};
use sqlx::SqlitePool;
use tower::Service as _;

/// Secret used to sign tokens in tests
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
    pub user: User,
}

impl TestContext {
    /// Creates a new test context with a fresh in-memory database
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            database_url: "sqlite::memory:".to_string(),
            jwt: JwtConfig {
                secret: TEST_JWT_SECRET.to_string(),
            },
        };

        // In-memory pools are capped at one connection, so every request in
        // a test sees the same database
        let db = create_pool(DatabaseConfig {
            url: config.database_url.clone(),
            ..Default::default()
        })
        .await?;

        schema::create_schema(&db).await?;

        let user = User::create(
            &db,
            CreateUser {
                username: "admin".to_string(),
                password: "123".to_string(),
            },
        )
        .await?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app, user })
    }

    /// Generates a valid bearer token for the test user
    pub fn auth_header(&self) -> String {
        let claims = Claims::new(self.user.username.clone());
        let token = create_token(&claims, TEST_JWT_SECRET).unwrap();
        format!("Bearer {}", token)
    }

    /// Sends a request through the router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().call(request).await.unwrap()
    }

    /// Sends a JSON body with the given method and path
    pub async fn send_json(
        &self,
        method: &str,
        uri: &str,
        body: serde_json::Value,
    ) -> Response<Body> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Sends a bodiless request with the given method and path
    pub async fn send_empty(&self, method: &str, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }
}

/// Reads a response body as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Asserts the status and returns the parsed body
pub async fn expect_status(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    let actual = response.status();
    let body = body_json(response).await;
    assert_eq!(actual, status, "unexpected status, body: {}", body);
    body
}

/// Creates a task through the API and asserts success
pub async fn create_task(ctx: &TestContext, username: &str, email: &str, text: &str) {
    let response = ctx
        .send_json(
            "POST",
            "/tasks",
            serde_json::json!({
                "username": username,
                "email": email,
                "text": text,
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}
