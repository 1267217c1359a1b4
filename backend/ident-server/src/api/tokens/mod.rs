pub mod access_token_request;
#[allow(clippy::module_inception)]
pub mod tokens;
