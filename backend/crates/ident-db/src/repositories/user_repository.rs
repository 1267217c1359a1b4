use crate::{DbError, Result as DbErrorResult, TransactionManager, TxHandle, UserStore};

use ident_core::{User, UserCredential, UserState};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SELECT_LIVE_BY_ID: &str = r#"
    SELECT id, username, password_hash, state, created_at, updated_at, version
    FROM id_users
    WHERE id = ? AND state != 'deleted'
"#;

const SELECT_LIVE_BY_USERNAME: &str = r#"
    SELECT id, username, password_hash, state, created_at, updated_at, version
    FROM id_users
    WHERE username = ? AND state != 'deleted'
"#;

pub struct UserRepository {
    transactions: TransactionManager,
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(transactions: TransactionManager) -> Self {
        let pool = transactions.pool().clone();
        Self { transactions, pool }
    }

    async fn fetch_live(&self, sql: &str, key: String) -> DbErrorResult<Option<UserCredential>> {
        let row = sqlx::query(sql)
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(credential_from_row).transpose()
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, user: &mut UserCredential, handle: TxHandle) -> DbErrorResult<()> {
        let id = Uuid::new_v4();

        let slot = self
            .transactions
            .slot(handle, ErrorLocation::from(Location::caller()))
            .await?;
        let mut guard = slot.lock().await;
        let tx = guard.as_mut().ok_or_else(|| DbError::TransactionClosed {
            handle,
            location: ErrorLocation::from(Location::caller()),
        })?;

        sqlx::query(
            r#"
            INSERT INTO id_users (
                id, username, password_hash, state,
                created_at, updated_at, version
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&user.user.username)
        .bind(&user.password_hash)
        .bind(user.user.state.as_str())
        .bind(user.user.created_at.timestamp_micros())
        .bind(user.user.updated_at.timestamp_micros())
        .bind(user.user.version)
        .execute(&mut **tx)
        .await?;

        user.user.id = id;
        log::debug!("Inserted user {} in transaction {}", id, handle);

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        Ok(self
            .get_credential_by_id(id)
            .await?
            .map(|credential| credential.user))
    }

    async fn get_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        Ok(self
            .get_credential_by_username(username)
            .await?
            .map(|credential| credential.user))
    }

    async fn get_credential_by_id(&self, id: Uuid) -> DbErrorResult<Option<UserCredential>> {
        self.fetch_live(SELECT_LIVE_BY_ID, id.to_string()).await
    }

    async fn get_credential_by_username(
        &self,
        username: &str,
    ) -> DbErrorResult<Option<UserCredential>> {
        self.fetch_live(SELECT_LIVE_BY_USERNAME, username.to_string())
            .await
    }

    async fn change_state(&self, old: &User, new: &User, handle: TxHandle) -> DbErrorResult<()> {
        let slot = self
            .transactions
            .slot(handle, ErrorLocation::from(Location::caller()))
            .await?;
        let mut guard = slot.lock().await;
        let tx = guard.as_mut().ok_or_else(|| DbError::TransactionClosed {
            handle,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let result = sqlx::query(
            r#"
            UPDATE id_users
            SET state = ?, updated_at = ?, version = ?
            WHERE id = ? AND version = ?
            "#,
        )
        .bind(new.state.as_str())
        .bind(new.updated_at.timestamp_micros())
        .bind(new.version)
        .bind(old.id.to_string())
        .bind(old.version)
        .execute(&mut **tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NoRowsAffected {
                message: format!("user {} is no longer at version {}", old.id, old.version),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

#[track_caller]
fn credential_from_row(row: &SqliteRow) -> DbErrorResult<UserCredential> {
    let id: String = row.try_get("id")?;
    let state: String = row.try_get("state")?;

    let user = User {
        id: Uuid::parse_str(&id).map_err(|e| corrupt_row(format!("bad id {}: {}", id, e)))?,
        username: row.try_get("username")?,
        state: state
            .parse::<UserState>()
            .map_err(|e| corrupt_row(format!("bad state for {}: {}", id, e)))?,
        created_at: timestamp(row.try_get("created_at")?)?,
        updated_at: timestamp(row.try_get("updated_at")?)?,
        version: row.try_get("version")?,
    };

    Ok(UserCredential::new(user, row.try_get("password_hash")?))
}

#[track_caller]
fn timestamp(micros: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros)
        .ok_or_else(|| corrupt_row(format!("timestamp out of range: {}", micros)))
}

#[track_caller]
fn corrupt_row(message: String) -> DbError {
    DbError::CorruptRow {
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
