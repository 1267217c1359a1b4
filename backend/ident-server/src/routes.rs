use crate::{
    AppState, create_user, delete_user, disable_user, health, login, rotate_token, validate_token,
};

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Users
        .route("/api/v1/users", post(create_user))
        .route("/api/v1/users/{username}", delete(delete_user))
        .route("/api/v1/users/{username}/disable", post(disable_user))
        // Tokens
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/tokens/validate", post(validate_token))
        .route("/api/v1/tokens/rotate", post(rotate_token))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
