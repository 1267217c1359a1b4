#![allow(dead_code)]

use ident_core::{ErrorLocation, User, UserCredential};
use ident_db::{DbError, Result as DbResult, Transactions, TxHandle, TxOutcome, UserStore};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

/// Applies writes immediately; the handle is only checked for presence.
#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<HashMap<Uuid, UserCredential>>,
    concurrent_writer: AtomicBool,
}

impl MemoryUserStore {
    /// The next `change_state` finds the row already bumped by another writer
    pub fn interleave_concurrent_write(&self) {
        self.concurrent_writer.store(true, Ordering::SeqCst);
    }

    pub fn row(&self, id: Uuid) -> Option<UserCredential> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    fn live(&self, predicate: impl Fn(&UserCredential) -> bool) -> Option<UserCredential> {
        self.rows
            .lock()
            .unwrap()
            .values()
            .find(|row| !row.user.is_deleted() && predicate(row))
            .cloned()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: &mut UserCredential, _handle: TxHandle) -> DbResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .values()
            .any(|row| !row.user.is_deleted() && row.user.username == user.user.username)
        {
            return Err(DbError::ConstraintViolation {
                message: "UNIQUE constraint failed: id_users.username".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        user.user.id = Uuid::new_v4();
        rows.insert(user.user.id, user.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> DbResult<Option<User>> {
        Ok(self.live(|row| row.user.id == id).map(|row| row.user))
    }

    async fn get_by_username(&self, username: &str) -> DbResult<Option<User>> {
        Ok(self
            .live(|row| row.user.username == username)
            .map(|row| row.user))
    }

    async fn get_credential_by_id(&self, id: Uuid) -> DbResult<Option<UserCredential>> {
        Ok(self.live(|row| row.user.id == id))
    }

    async fn get_credential_by_username(&self, username: &str) -> DbResult<Option<UserCredential>> {
        Ok(self.live(|row| row.user.username == username))
    }

    async fn change_state(&self, old: &User, new: &User, _handle: TxHandle) -> DbResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if self.concurrent_writer.swap(false, Ordering::SeqCst)
            && let Some(row) = rows.get_mut(&old.id)
        {
            row.user.version += 1;
        }

        match rows.get_mut(&old.id) {
            Some(row) if row.user.version == old.version => {
                row.user.state = new.state;
                row.user.updated_at = new.updated_at;
                row.user.version = new.version;
                Ok(())
            }
            _ => Err(DbError::NoRowsAffected {
                message: format!("user {} is no longer at version {}", old.id, old.version),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Hands out handles and records how each one was ended
#[derive(Default)]
pub struct RecordingTransactions {
    next: AtomicU64,
    ended: Mutex<Vec<(TxHandle, TxOutcome)>>,
    fail_commits: AtomicBool,
}

impl RecordingTransactions {
    /// Every later `end(.., Commit)` reports a commit failure
    pub fn fail_commits(&self) {
        self.fail_commits.store(true, Ordering::SeqCst);
    }

    pub fn begun(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }

    pub fn outcomes(&self) -> Vec<TxOutcome> {
        self.ended
            .lock()
            .unwrap()
            .iter()
            .map(|(_, outcome)| *outcome)
            .collect()
    }
}

#[async_trait]
impl Transactions for RecordingTransactions {
    async fn begin(&self) -> DbResult<TxHandle> {
        Ok(TxHandle::new(self.next.fetch_add(1, Ordering::SeqCst) + 1))
    }

    async fn end(&self, handle: TxHandle, outcome: TxOutcome) -> DbResult<()> {
        self.ended.lock().unwrap().push((handle, outcome));

        if outcome == TxOutcome::Commit && self.fail_commits.load(Ordering::SeqCst) {
            return Err(DbError::from(sqlx::Error::Protocol(format!(
                "commit of transaction {} failed",
                handle
            ))));
        }

        Ok(())
    }
}
