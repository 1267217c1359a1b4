use crate::{ApiResult, AppState, LoginRequest, TokenPairResponse};

use axum::{Json, extract::State};

/// POST /api/v1/auth/login
///
/// Exchange username and password for an access/refresh token pair
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenPairResponse>> {
    let pair = state
        .identity
        .authenticate(&req.username, &req.password)
        .await?;

    Ok(Json(pair.into()))
}
