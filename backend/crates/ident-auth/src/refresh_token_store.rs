use crate::{RefreshTokenCache, Result as AuthErrorResult};

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

/// One live refresh token per identity, kept in a [`RefreshTokenCache`].
#[derive(Clone)]
pub struct RefreshTokenStore {
    cache: Arc<dyn RefreshTokenCache>,
    ttl: Duration,
}

impl RefreshTokenStore {
    pub fn new(cache: Arc<dyn RefreshTokenCache>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn key(user_id: Uuid) -> String {
        format!("user:refreshToken:{}", user_id)
    }

    /// Make `token` the current refresh token for `user_id`
    pub async fn put(&self, user_id: Uuid, token: &str) -> AuthErrorResult<()> {
        self.cache.set(&Self::key(user_id), token, self.ttl).await
    }

    pub async fn get(&self, user_id: Uuid) -> AuthErrorResult<Option<String>> {
        self.cache.get(&Self::key(user_id)).await
    }
}
