mod error_kind;

pub use error_kind::ErrorKind;

// -------------------------------------------------------------------------- //

use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid user state: {value} {location}")]
    InvalidUserState {
        value: String,
        location: ErrorLocation,
    },

    #[error("Illegal state transition: {from} -> {to} {location}")]
    IllegalTransition {
        from: String,
        to: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Every core error is caused by the caller's input.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::BadRequest
    }
}

pub type Result<T> = StdResult<T, CoreError>;
