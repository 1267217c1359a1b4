#![allow(dead_code)]

use ident_db::{PoolSettings, TransactionManager, UserRepository, connect};

use std::time::Duration;

use tempfile::TempDir;

/// A file-backed database that lives as long as its temp directory.
///
/// In-memory SQLite gives every pooled connection its own database, which
/// hides exactly the cross-connection behaviour these tests care about.
pub struct TestDb {
    pub transactions: TransactionManager,
    _dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        Self::with_connections(5).await
    }

    pub async fn with_connections(max_connections: u32) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut settings = PoolSettings::new(dir.path().join("ident.db"));
        settings.max_connections = max_connections;
        settings.acquire_timeout = Duration::from_secs(2);

        let pool = connect(&settings).await.expect("Failed to create test pool");

        Self {
            transactions: TransactionManager::new(pool),
            _dir: dir,
        }
    }

    pub fn repository(&self) -> UserRepository {
        UserRepository::new(self.transactions.clone())
    }
}
