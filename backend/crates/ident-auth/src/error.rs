use ident_core::ErrorKind;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    /// Hashing failed or a stored hash could not be parsed
    #[error("Password hash error: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Refresh token cache error: {message} {location}")]
    Cache {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TokenExpired { .. }
            | Self::JwtDecode { .. }
            | Self::InvalidClaim { .. } => ErrorKind::Unauthorized,
            Self::JwtEncode { .. } | Self::PasswordHash { .. } | Self::Cache { .. } => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Self::TokenExpired { .. })
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
