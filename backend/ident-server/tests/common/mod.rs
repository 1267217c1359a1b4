#![allow(dead_code)]

//! Test infrastructure for ident-server API tests

use ident_auth::{Claims, TokenService};
use ident_config::{Config, PasswordConfig};
use ident_db::{PoolSettings, connect};
use ident_server::{AppState, build_router};

use std::time::Duration;

use axum::Router;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::{Value, json};
use tempfile::TempDir;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "server-test-secret-with-at-least-32-chars";
pub const PASSWORD: &str = "correct-horse-battery";

/// Valid config with cheap argon2 costs
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.auth.jwt_secret = Some(TEST_JWT_SECRET.to_string());
    config.password = PasswordConfig {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    };
    config
}

/// AppState over a fresh on-disk database
pub struct TestApp {
    pub state: AppState,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let pool = connect(&PoolSettings::new(dir.path().join("ident.db")))
            .await
            .expect("Failed to open test database");
        let state =
            AppState::from_config(&test_config(), pool).expect("Failed to build app state");

        Self { state, _dir: dir }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub fn server(&self) -> TestServer {
        TestServer::builder()
            .build(self.router())
            .expect("Failed to create test server")
    }
}

/// Register `username` through the API
pub async fn create_user(server: &TestServer, username: &str) -> Value {
    let response = server
        .post("/api/v1/users")
        .json(&json!({ "username": username, "password": PASSWORD }))
        .await;
    response.assert_status(http::StatusCode::CREATED);
    response.json::<Value>()
}

/// Log `username` in and return the token pair body
pub async fn login(server: &TestServer, username: &str) -> Value {
    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "username": username, "password": PASSWORD }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}

/// Correctly signed access token that expired an hour ago
pub fn create_expired_token(user_id: Uuid) -> String {
    let issued_at = Utc::now() - chrono::Duration::hours(2);
    TokenService::with_hs256(TEST_JWT_SECRET.as_bytes(), Duration::from_secs(15 * 60))
        .sign(&Claims::new(user_id, issued_at, Duration::from_secs(3600)))
        .expect("Failed to sign token")
}
