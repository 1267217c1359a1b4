//! Input checks applied before any store or hashing work.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 64;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Usernames are 3-64 characters of ASCII letters, digits, `-`, `_` and `.`
#[track_caller]
pub fn validate_username(username: &str) -> CoreErrorResult<()> {
    let length = username.chars().count();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&length) {
        return Err(validation_error(
            "username",
            format!(
                "username must be {}-{} characters, got {}",
                MIN_USERNAME_LENGTH, MAX_USERNAME_LENGTH, length
            ),
        ));
    }

    if let Some(c) = username
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(validation_error(
            "username",
            format!("username contains invalid character '{}'", c),
        ));
    }

    Ok(())
}

#[track_caller]
pub fn validate_password(password: &str) -> CoreErrorResult<()> {
    let length = password.chars().count();
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        // Length only; never echo the password itself
        return Err(validation_error(
            "password",
            format!(
                "password must be {}-{} characters",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
            ),
        ));
    }

    Ok(())
}

#[track_caller]
fn validation_error(field: &str, message: String) -> CoreError {
    CoreError::Validation {
        message,
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    }
}
