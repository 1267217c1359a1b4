use crate::TxHandle;

use ident_core::ErrorKind;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Connection pool exhausted: timed out waiting for a connection {location}")]
    PoolExhausted { location: ErrorLocation },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    /// A stored row could not be decoded into a user
    #[error("Corrupt row: {message} {location}")]
    CorruptRow {
        message: String,
        location: ErrorLocation,
    },

    #[error("Constraint violation: {message} {location}")]
    ConstraintViolation {
        message: String,
        location: ErrorLocation,
    },

    /// Conditional update matched nothing: the row's version moved on.
    #[error("No rows affected: {message} {location}")]
    NoRowsAffected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transaction {handle} not found {location}")]
    TransactionNotFound {
        handle: TxHandle,
        location: ErrorLocation,
    },

    #[error("Transaction {handle} already closed {location}")]
    TransactionClosed {
        handle: TxHandle,
        location: ErrorLocation,
    },

    #[error("Transaction cleanup failed: {message} {location}")]
    Cleanup {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoRowsAffected { .. } => ErrorKind::NoRowsAffected,
            Self::ConstraintViolation { .. } => ErrorKind::Conflict,
            _ => ErrorKind::InternalServerError,
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            sqlx::Error::PoolTimedOut => Self::PoolExhausted { location },
            sqlx::Error::Database(ref db_error) if db_error.is_unique_violation() => {
                Self::ConstraintViolation {
                    message: db_error.message().to_string(),
                    location,
                }
            }
            _ => Self::Sqlx { source, location },
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
