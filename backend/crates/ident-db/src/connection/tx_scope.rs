//! Scoped unit of work.
//!
//! `TxScope` owns a handle between `begin` and `close`. Every exit path
//! releases the connection: `close` commits or rolls back according to the
//! operation's result, and a scope dropped without `close` (early return,
//! panic unwind, cancelled future) schedules a rollback on the runtime.

use crate::{DbError, Result as DbErrorResult, Transactions, TxHandle, TxOutcome};

use std::sync::Arc;

pub struct TxScope {
    transactions: Arc<dyn Transactions>,
    handle: TxHandle,
    open: bool,
}

impl TxScope {
    pub async fn begin(transactions: Arc<dyn Transactions>) -> DbErrorResult<Self> {
        let handle = transactions.begin().await?;
        Ok(Self {
            transactions,
            handle,
            open: true,
        })
    }

    pub fn handle(&self) -> TxHandle {
        self.handle
    }

    /// Finish the unit of work with the operation's `result`.
    ///
    /// `Ok` commits and a commit failure replaces the value. `Err` rolls back
    /// and the original error is returned untouched.
    pub async fn close<T, E>(mut self, result: Result<T, E>) -> Result<T, E>
    where
        E: From<DbError>,
    {
        let outcome = TxOutcome::of(&result);
        self.open = false;
        let ended = self.transactions.end(self.handle, outcome).await;

        match (result, ended) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(commit_error)) => Err(E::from(commit_error)),
            (Err(error), Ok(())) => Err(error),
            (Err(error), Err(cleanup_error)) => {
                log::error!(
                    "Transaction {} cleanup failed after error: {}",
                    self.handle,
                    cleanup_error
                );
                Err(error)
            }
        }
    }
}

impl Drop for TxScope {
    fn drop(&mut self) {
        if !self.open {
            return;
        }

        let handle = self.handle;
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                log::warn!("Transaction {} abandoned, rolling back", handle);
                let transactions = Arc::clone(&self.transactions);
                runtime.spawn(async move {
                    if let Err(e) = transactions.end(handle, TxOutcome::Rollback).await {
                        log::error!("Rollback of abandoned transaction {} failed: {}", handle, e);
                    }
                });
            }
            Err(_) => {
                log::error!(
                    "Transaction {} abandoned outside a runtime; left to the pool",
                    handle
                );
            }
        }
    }
}
