//! Identity entity.
//!
//! `User` is the public view of an identity and never carries credential
//! material. `UserCredential` pairs it with the stored password hash and is
//! only produced by the credential reads used during authentication.

use crate::{UserState, next_version};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store on insert; nil until then
    pub id: Uuid,
    pub username: String,
    pub state: UserState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Optimistic locking version
    pub version: i32,
}

impl User {
    /// A not-yet-persisted, enabled identity stamped with `now`
    pub fn new(username: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::nil(),
            username: username.into(),
            state: UserState::Enabled,
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    pub fn is_persisted(&self) -> bool {
        !self.id.is_nil()
    }

    pub fn is_deleted(&self) -> bool {
        self.state == UserState::Deleted
    }

    /// The row this identity becomes after moving to `state` at `now`.
    ///
    /// The update timestamp never moves backwards, even if the clock does.
    pub fn changed_to(&self, state: UserState, now: DateTime<Utc>) -> Self {
        Self {
            state,
            updated_at: now.max(self.updated_at),
            version: next_version(self.version),
            ..self.clone()
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct UserCredential {
    pub user: User,
    pub password_hash: String,
}

impl UserCredential {
    pub fn new(user: User, password_hash: String) -> Self {
        Self {
            user,
            password_hash,
        }
    }
}

impl std::fmt::Debug for UserCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredential")
            .field("user", &self.user)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}
