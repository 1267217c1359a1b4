//! User lifecycle handlers

use crate::{ApiResult, AppState, CreateUserRequest, UserResponse};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// POST /api/v1/users
///
/// Register a new enabled user
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state.identity.create(&req.username, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse { user: user.into() }),
    ))
}

/// POST /api/v1/users/{username}/disable
pub async fn disable_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.identity.disable(&username).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// DELETE /api/v1/users/{username}
///
/// Soft delete; the username becomes available again
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.identity.delete(&username).await?;

    Ok(Json(UserResponse { user: user.into() }))
}
