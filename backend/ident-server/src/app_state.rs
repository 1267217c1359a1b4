//! Shared state handed to every handler.

use crate::error::Result as ServerErrorResult;

use ident_auth::{
    CredentialHasher, HashParams, MemoryRefreshTokenCache, RefreshTokenStore, TokenService,
};
use ident_config::{Config, ConfigError};
use ident_db::{PoolSettings, TransactionManager, UserRepository};
use ident_service::IdentityService;

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<IdentityService>,
    pub pool: SqlitePool,
}

impl AppState {
    /// Wire the identity service over `pool` using the validated `config`.
    pub fn from_config(config: &Config, pool: SqlitePool) -> ServerErrorResult<Self> {
        let secret = config
            .auth
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;

        let transactions = TransactionManager::new(pool.clone());
        let users = UserRepository::new(transactions.clone());

        let tokens = TokenService::with_hs256(secret.as_bytes(), config.auth.access_token_ttl())
            .with_leeway(config.auth.leeway_secs);

        let hasher = CredentialHasher::new(HashParams {
            memory_kib: config.password.memory_kib,
            iterations: config.password.iterations,
            parallelism: config.password.parallelism,
        })?;

        let cache = Arc::new(MemoryRefreshTokenCache::with_sweep_threshold(
            config.cache.sweep_threshold,
        ));
        let refresh_tokens = RefreshTokenStore::new(cache, config.auth.refresh_token_ttl());

        let identity = IdentityService::new(
            Arc::new(users),
            Arc::new(transactions),
            tokens,
            hasher,
            refresh_tokens,
        );

        Ok(Self {
            identity: Arc::new(identity),
            pool,
        })
    }
}

/// Pool options derived from the `[database]` section
pub fn pool_settings(config: &Config) -> ServerErrorResult<PoolSettings> {
    Ok(PoolSettings {
        path: config.database_path()?,
        max_connections: config.database.max_connections,
        acquire_timeout: Duration::from_secs(config.database.acquire_timeout_secs),
        busy_timeout: Duration::from_secs(config.database.busy_timeout_secs),
    })
}
