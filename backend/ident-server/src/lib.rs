pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::login, login_request::LoginRequest, token_pair_response::TokenPairResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    tokens::{
        access_token_request::AccessTokenRequest,
        tokens::{rotate_token, validate_token},
    },
    users::{
        create_user_request::CreateUserRequest,
        user_dto::UserDto,
        user_response::UserResponse,
        users::{create_user, delete_user, disable_user},
    },
};
pub use app_state::{AppState, pool_settings};
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
