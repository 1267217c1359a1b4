#![allow(dead_code)]

use super::fakes::{MemoryUserStore, RecordingTransactions};

use ident_auth::{
    Claims, CredentialHasher, HashParams, MemoryRefreshTokenCache, RefreshTokenStore, TokenService,
};
use ident_db::{PoolSettings, TransactionManager, Transactions, UserRepository, UserStore, connect};
use ident_service::IdentityService;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tempfile::TempDir;
use uuid::Uuid;

pub const SECRET: &[u8] = b"service-test-secret-at-least-32-bytes";
pub const PASSWORD: &str = "correct-horse-battery";

pub fn token_service() -> TokenService {
    TokenService::with_hs256(SECRET, Duration::from_secs(15 * 60))
}

pub fn cheap_hasher() -> CredentialHasher {
    CredentialHasher::new(HashParams {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap()
}

/// A correctly signed access token that expired an hour ago
pub fn expired_token_for(user_id: Uuid) -> String {
    let issued_at = Utc::now() - chrono::Duration::hours(2);
    token_service()
        .sign(&Claims::new(user_id, issued_at, Duration::from_secs(3600)))
        .unwrap()
}

fn build_service(
    users: Arc<dyn UserStore>,
    transactions: Arc<dyn Transactions>,
    cache: Arc<MemoryRefreshTokenCache>,
) -> IdentityService {
    IdentityService::new(
        users,
        transactions,
        token_service(),
        cheap_hasher(),
        RefreshTokenStore::new(cache, Duration::from_secs(3600)),
    )
}

/// Service wired to in-memory fakes
pub struct FakeHarness {
    pub service: IdentityService,
    pub store: Arc<MemoryUserStore>,
    pub transactions: Arc<RecordingTransactions>,
}

impl FakeHarness {
    pub fn new() -> Self {
        let store = Arc::new(MemoryUserStore::default());
        let transactions = Arc::new(RecordingTransactions::default());
        let service = build_service(
            store.clone(),
            transactions.clone(),
            Arc::new(MemoryRefreshTokenCache::new()),
        );

        Self {
            service,
            store,
            transactions,
        }
    }
}

/// Service wired to a file-backed SQLite database
pub struct SqliteHarness {
    pub service: Arc<IdentityService>,
    pub repository: Arc<UserRepository>,
    pub transactions: TransactionManager,
    _dir: TempDir,
}

impl SqliteHarness {
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut settings = PoolSettings::new(dir.path().join("ident.db"));
        settings.acquire_timeout = Duration::from_secs(2);
        let pool = connect(&settings).await.expect("Failed to create test pool");

        let transactions = TransactionManager::new(pool);
        let repository = Arc::new(UserRepository::new(transactions.clone()));
        let service = build_service(
            repository.clone(),
            Arc::new(transactions.clone()),
            Arc::new(MemoryRefreshTokenCache::new()),
        );

        Self {
            service: Arc::new(service),
            repository,
            transactions,
            _dir: dir,
        }
    }
}
