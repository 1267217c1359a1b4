pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, ErrorKind, Result};
pub use error_location::ErrorLocation;
pub use models::user::{User, UserCredential};
pub use models::user_state::UserState;
pub use models::version::{VERSION_WRAP, next_version};
pub use validation::{validate_password, validate_username};

#[cfg(test)]
mod tests;
