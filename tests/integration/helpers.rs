//! Shared test helpers for integration tests.

use std::sync::{Arc, OnceLock};

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tower::ServiceExt;

use freshgrad_api::AppState;
use freshgrad_core::config::AppConfig;
use freshgrad_database::DatabasePool;

/// Tests share one database, so they run one at a time.
fn test_lock() -> Arc<Mutex<()>> {
    static LOCK: OnceLock<Arc<Mutex<()>>> = OnceLock::new();
    Arc::clone(LOCK.get_or_init(|| Arc::new(Mutex::new(()))))
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    _guard: OwnedMutexGuard<()>,
}

impl TestApp {
    /// Create a new test application against a clean database
    pub async fn new() -> Self {
        let guard = test_lock().lock_owned().await;

        let config = AppConfig::load_from("config/test").expect("Failed to load test config");

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        let db_pool = db.into_pool();

        freshgrad_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let state = AppState::new(config, db_pool.clone());
        let router = freshgrad_api::build_router(state);

        Self {
            router,
            db_pool,
            _guard: guard,
        }
    }

    /// Clean all mutable data from the database. Seeded reference tables
    /// (tracks, candidate_status_meta) are left alone.
    async fn clean_database(pool: &PgPool) {
        let tables = [
            "audit_log",
            "notifications",
            "corrections",
            "candidate_notes",
            "course_results",
            "enrollments",
            "candidates",
            "courses",
            "mentors",
            "users",
        ];

        for table in &tables {
            let query = format!("DELETE FROM {table}");
            sqlx::query(&query)
                .execute(pool)
                .await
                .unwrap_or_else(|e| panic!("Failed to clean {table}: {e}"));
        }
    }

    /// Register a user through the API and return the response body
    pub async fn register_user(&self, email: &str, password: &str, name: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/users/auth/register",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                    "name": name,
                })),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );
        response.body
    }

    /// Login and return the JWT access token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/users/auth/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("accessToken")
            .and_then(|v| v.as_str())
            .expect("No accessToken in login response")
            .to_string()
    }

    /// Create a candidate through the API and return its id
    pub async fn create_candidate(&self, body: Value) -> String {
        let response = self.request("POST", "/api/candidates", Some(body)).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Candidate creation failed: {:?}",
            response.body
        );
        response.body["id"].as_str().expect("candidate id").to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (Null when the body was not JSON)
    pub body: Value,
}
