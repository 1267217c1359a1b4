use ident_auth::AuthError;
use ident_core::{CoreError, ErrorKind};
use ident_db::DbError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store error: {0}")]
    Store(#[from] DbError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Invalid input: {0}")]
    Core(#[from] CoreError),
}

impl IdentityError {
    /// The single taxonomy bucket this error falls into
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::Forbidden { .. } => ErrorKind::Forbidden,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Store(e) => e.kind(),
            Self::Auth(e) => e.kind(),
            Self::Core(e) => e.kind(),
        }
    }

    /// Field name for input validation failures
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Core(CoreError::Validation { field, .. }) => field.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
