//! Access token handlers

use crate::{AccessTokenRequest, ApiResult, AppState, TokenPairResponse, UserResponse};

use axum::{Json, extract::State};

/// POST /api/v1/tokens/validate
///
/// Resolve a live access token to its user
pub async fn validate_token(
    State(state): State<AppState>,
    Json(req): Json<AccessTokenRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.identity.validate_token(&req.access_token).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// POST /api/v1/tokens/rotate
///
/// Trade an expired access token for a fresh pair
pub async fn rotate_token(
    State(state): State<AppState>,
    Json(req): Json<AccessTokenRequest>,
) -> ApiResult<Json<TokenPairResponse>> {
    let pair = state.identity.rotate_token(&req.access_token).await?;

    Ok(Json(pair.into()))
}
