//! Persistence contract for identities.
//!
//! Writes run inside the transaction named by a [`TxHandle`]; reads go
//! straight to the pool and never see soft-deleted rows.

use crate::{Result as DbErrorResult, TxHandle};

use ident_core::{User, UserCredential};

use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new identity. The store assigns `user.user.id`.
    async fn create(&self, user: &mut UserCredential, handle: TxHandle) -> DbErrorResult<()>;

    async fn get_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>>;

    async fn get_by_username(&self, username: &str) -> DbErrorResult<Option<User>>;

    async fn get_credential_by_id(&self, id: Uuid) -> DbErrorResult<Option<UserCredential>>;

    async fn get_credential_by_username(
        &self,
        username: &str,
    ) -> DbErrorResult<Option<UserCredential>>;

    /// Conditionally replace `old` with `new`.
    ///
    /// Fails with `NoRowsAffected` when the row no longer carries
    /// `old.version`.
    async fn change_state(&self, old: &User, new: &User, handle: TxHandle) -> DbErrorResult<()>;
}
