//! Key-value store for refresh tokens.
//!
//! `RefreshTokenCache` is the swap point for a networked cache. The bundled
//! `MemoryRefreshTokenCache` keeps entries in process with per-key expiry.

use crate::Result as AuthErrorResult;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

#[async_trait]
pub trait RefreshTokenCache: Send + Sync {
    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AuthErrorResult<()>;

    /// `None` when the key is absent or has expired
    async fn get(&self, key: &str) -> AuthErrorResult<Option<String>>;
}

struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

pub struct MemoryRefreshTokenCache {
    entries: RwLock<HashMap<String, Entry>>,
    sweep_threshold: usize,
}

impl MemoryRefreshTokenCache {
    pub const DEFAULT_SWEEP_THRESHOLD: usize = 1024;

    pub fn new() -> Self {
        Self::with_sweep_threshold(Self::DEFAULT_SWEEP_THRESHOLD)
    }

    /// Expired entries are purged on `set` once the map holds more than
    /// `sweep_threshold` keys.
    pub fn with_sweep_threshold(sweep_threshold: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            sweep_threshold,
        }
    }

    /// Number of stored keys, expired ones included until swept
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryRefreshTokenCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenCache for MemoryRefreshTokenCache {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AuthErrorResult<()> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: now + ttl,
            },
        );

        if entries.len() > self.sweep_threshold {
            let before = entries.len();
            entries.retain(|_, entry| entry.is_live(now));
            log::debug!(
                "Swept {} expired refresh tokens",
                before - entries.len()
            );
        }

        Ok(())
    }

    async fn get(&self, key: &str) -> AuthErrorResult<Option<String>> {
        let now = Instant::now();
        let entries = self.entries.read().await;

        Ok(entries
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone()))
    }
}
