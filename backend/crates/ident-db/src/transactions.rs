//! Unit-of-work contract.
//!
//! A [`TxHandle`] names one checked-out connection with one open
//! transaction. Handles are produced by [`Transactions::begin`] and are
//! dead after [`Transactions::end`]; they are never persisted or shared
//! between operations.

use crate::Result as DbErrorResult;

use async_trait::async_trait;

/// Opaque transaction handle. Values are never reused within a process run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TxHandle(u64);

impl TxHandle {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TxHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a unit of work is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxOutcome {
    Commit,
    Rollback,
}

impl TxOutcome {
    /// Commit on success, roll back on any error
    pub fn of<T, E>(result: &Result<T, E>) -> Self {
        if result.is_ok() {
            Self::Commit
        } else {
            Self::Rollback
        }
    }
}

#[async_trait]
pub trait Transactions: Send + Sync {
    /// Check out a connection and open a transaction on it
    async fn begin(&self) -> DbErrorResult<TxHandle>;

    /// Resolve the transaction, release its connection and forget the handle.
    ///
    /// Returns the commit error, if any. Rollback failures are logged and
    /// swallowed. Cleanup runs to completion even if the caller is cancelled.
    async fn end(&self, handle: TxHandle, outcome: TxOutcome) -> DbErrorResult<()>;
}
