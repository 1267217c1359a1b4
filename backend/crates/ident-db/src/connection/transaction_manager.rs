//! Connection-scoped transaction registry.
//!
//! Each live [`TxHandle`] owns exactly one pooled connection with one open
//! transaction. The handle table is the only shared mutable state: lookups
//! take the read lock, registration and removal take the write lock, and
//! neither lock is ever held across database I/O.

use crate::{DbError, Result as DbErrorResult, Transactions, TxHandle, TxOutcome};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use error_location::ErrorLocation;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tokio::sync::{Mutex, RwLock};

/// A registered transaction. `None` once it has been committed or rolled back.
pub(crate) type TxSlot = Arc<Mutex<Option<Transaction<'static, Sqlite>>>>;

#[derive(Clone)]
pub struct TransactionManager {
    pool: SqlitePool,
    transactions: Arc<RwLock<HashMap<TxHandle, TxSlot>>>,
    // Monotonic and never reset, so a late finisher can't alias a newer handle
    next_handle: Arc<AtomicU64>,
}

impl TransactionManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            transactions: Arc::new(RwLock::new(HashMap::new())),
            next_handle: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Number of handles currently between `begin` and `end`
    pub async fn live_count(&self) -> usize {
        self.transactions.read().await.len()
    }

    /// Resolve a handle to its transaction slot (read lock only).
    ///
    /// `location` is captured at the call site.
    pub(crate) async fn slot(
        &self,
        handle: TxHandle,
        location: ErrorLocation,
    ) -> DbErrorResult<TxSlot> {
        let transactions = self.transactions.read().await;
        transactions
            .get(&handle)
            .cloned()
            .ok_or(DbError::TransactionNotFound { handle, location })
    }

    async fn register(&self, tx: Transaction<'static, Sqlite>) -> TxHandle {
        let handle = TxHandle::new(self.next_handle.fetch_add(1, Ordering::Relaxed) + 1);
        let mut transactions = self.transactions.write().await;
        transactions.insert(handle, Arc::new(Mutex::new(Some(tx))));
        handle
    }

    async fn unregister(&self, handle: TxHandle) -> Option<TxSlot> {
        let mut transactions = self.transactions.write().await;
        transactions.remove(&handle)
    }

    /// Remove the entry, then resolve its transaction outside the lock.
    /// Dropping the resolved transaction hands the connection back to the pool.
    async fn finalize(&self, handle: TxHandle, outcome: TxOutcome) -> DbErrorResult<()> {
        let slot = self
            .unregister(handle)
            .await
            .ok_or_else(|| DbError::TransactionNotFound {
                handle,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let Some(tx) = slot.lock().await.take() else {
            log::warn!("Transaction {} was already closed, skipping {:?}", handle, outcome);
            return Ok(());
        };

        match outcome {
            TxOutcome::Commit => {
                tx.commit().await.map_err(|e| {
                    log::error!("Transaction {} commit failed: {}", handle, e);
                    DbError::from(e)
                })?;
                log::debug!("Transaction {} committed", handle);
            }
            TxOutcome::Rollback => {
                // The operation already failed; its error is the one reported
                match tx.rollback().await {
                    Ok(()) => log::debug!("Transaction {} rolled back", handle),
                    Err(e) => log::error!("Transaction {} rollback failed: {}", handle, e),
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl Transactions for TransactionManager {
    async fn begin(&self) -> DbErrorResult<TxHandle> {
        let tx = self.pool.begin().await.map_err(|e| {
            log::error!("Failed to begin transaction: {}", e);
            DbError::from(e)
        })?;

        let handle = self.register(tx).await;
        log::debug!("Transaction {} started", handle);

        Ok(handle)
    }

    async fn end(&self, handle: TxHandle, outcome: TxOutcome) -> DbErrorResult<()> {
        // Detached so that cancelling the caller cannot strand the connection
        let manager = self.clone();
        let cleanup = tokio::spawn(async move { manager.finalize(handle, outcome).await });

        match cleanup.await {
            Ok(result) => result,
            Err(e) => Err(DbError::Cleanup {
                message: format!("transaction {} cleanup task failed: {}", handle, e),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
