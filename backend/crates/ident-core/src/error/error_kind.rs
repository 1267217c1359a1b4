use serde::Serialize;

/// Closed error taxonomy the identity use case reasons about.
///
/// Every failure crossing the service boundary classifies into exactly one
/// of these kinds; transport layers translate kinds, never raw causes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Unauthorized,
    NotFound,
    Forbidden,
    Conflict,
    /// Optimistic-concurrency loss: the row exists but its version moved on.
    NoRowsAffected,
    BadRequest,
    InternalServerError,
}

impl ErrorKind {
    /// Machine-readable code used in API error bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound => "NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::Conflict => "CONFLICT",
            Self::NoRowsAffected => "NO_ROWS_AFFECTED",
            Self::BadRequest => "BAD_REQUEST",
            Self::InternalServerError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
