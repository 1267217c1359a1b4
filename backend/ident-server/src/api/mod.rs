pub mod auth;
pub mod error;
pub mod tokens;
pub mod users;
