//! Identity lifecycle and token issuance.
//!
//! `IdentityService` is the only writer of identity state. Mutations run
//! inside a [`TxScope`]; token issuance and refresh token caching happen
//! after the unit of work has been closed and never hold a connection.

use crate::{IdentityError, Result as IdentityErrorResult};

use ident_auth::{CredentialHasher, RefreshTokenStore, TokenPair, TokenService};
use ident_core::{User, UserCredential, UserState, validate_password, validate_username};
use ident_db::{DbError, Transactions, TxScope, UserStore};

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use error_location::ErrorLocation;
use uuid::Uuid;

pub struct IdentityService {
    users: Arc<dyn UserStore>,
    transactions: Arc<dyn Transactions>,
    tokens: TokenService,
    hasher: CredentialHasher,
    refresh_tokens: RefreshTokenStore,
}

impl IdentityService {
    pub fn new(
        users: Arc<dyn UserStore>,
        transactions: Arc<dyn Transactions>,
        tokens: TokenService,
        hasher: CredentialHasher,
        refresh_tokens: RefreshTokenStore,
    ) -> Self {
        Self {
            users,
            transactions,
            tokens,
            hasher,
            refresh_tokens,
        }
    }

    /// Register a new enabled identity.
    pub async fn create(&self, username: &str, password: &str) -> IdentityErrorResult<User> {
        validate_username(username)?;
        validate_password(password)?;

        if self.users.get_by_username(username).await?.is_some() {
            return Err(IdentityError::Conflict {
                message: format!("username '{}' is taken", username),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let password_hash = self.hasher.hash(password).await?;
        let mut credential = UserCredential::new(User::new(username, Utc::now()), password_hash);

        let scope = TxScope::begin(Arc::clone(&self.transactions)).await?;
        let created = self
            .users
            .create(&mut credential, scope.handle())
            .await
            .map_err(|e| match e {
                // Lost the race to a concurrent create
                DbError::ConstraintViolation { location, .. } => IdentityError::Conflict {
                    message: format!("username '{}' is taken", username),
                    location,
                },
                other => IdentityError::from(other),
            });
        scope.close(created).await?;

        log::info!("Created user {} ({})", credential.user.id, username);

        Ok(credential.user)
    }

    /// Exchange a username and password for a token pair.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> IdentityErrorResult<TokenPair> {
        let Some(credential) = self.users.get_credential_by_username(username).await? else {
            log::debug!("Authentication failed: unknown user '{}'", username);
            return Err(unauthorized("invalid username or password"));
        };

        if !self
            .hasher
            .verify(password, &credential.password_hash)
            .await?
        {
            log::debug!("Authentication failed: wrong password for {}", credential.user.id);
            return Err(unauthorized("invalid username or password"));
        }

        self.issue_tokens(credential.user.id).await
    }

    /// Move the identity named `username` to `target`.
    ///
    /// A concurrent writer surfaces as `NoRowsAffected`; the caller may
    /// refetch and retry.
    pub async fn change_state(
        &self,
        username: &str,
        target: UserState,
    ) -> IdentityErrorResult<User> {
        let Some(current) = self.users.get_by_username(username).await? else {
            return Err(IdentityError::NotFound {
                message: format!("user '{}' not found", username),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        current.state.transition_to(target)?;
        let updated = current.changed_to(target, Utc::now());

        let scope = TxScope::begin(Arc::clone(&self.transactions)).await?;
        let changed = self
            .users
            .change_state(&current, &updated, scope.handle())
            .await
            .map_err(IdentityError::from);
        scope.close(changed).await?;

        log::info!(
            "User {} moved {} -> {} (version {})",
            updated.id,
            current.state,
            updated.state,
            updated.version
        );

        Ok(updated)
    }

    pub async fn disable(&self, username: &str) -> IdentityErrorResult<User> {
        self.change_state(username, UserState::Disabled).await
    }

    pub async fn delete(&self, username: &str) -> IdentityErrorResult<User> {
        self.change_state(username, UserState::Deleted).await
    }

    /// Resolve a live access token to its identity.
    pub async fn validate_token(&self, token: &str) -> IdentityErrorResult<User> {
        let user_id = self
            .tokens
            .verify(token)
            .and_then(|claims| claims.user_id())
            .map_err(|e| {
                log::debug!("Token validation failed: {}", e);
                unauthorized("invalid access token")
            })?;

        self.users
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| IdentityError::NotFound {
                message: format!("user {} not found", user_id),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Trade an expired access token for a fresh pair.
    pub async fn rotate_token(&self, access_token: &str) -> IdentityErrorResult<TokenPair> {
        // Only an expired token may be rotated: a still-valid one is refused
        // and possession of the current refresh token is not checked.
        match self.tokens.verify(access_token) {
            Ok(_) => {
                return Err(IdentityError::Forbidden {
                    message: "access token has not expired".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) if e.is_expired() => {}
            Err(e) => {
                log::debug!("Token rotation refused: {}", e);
                return Err(unauthorized("invalid access token"));
            }
        }

        let user_id = self
            .tokens
            .verify_signature(access_token)
            .and_then(|claims| claims.user_id())
            .map_err(|e| {
                log::debug!("Token rotation refused: {}", e);
                unauthorized("invalid access token")
            })?;

        let Some(user) = self.users.get_by_id(user_id).await? else {
            return Err(unauthorized("invalid access token"));
        };

        self.issue_tokens(user.id).await
    }

    /// The refresh token most recently issued to `user_id`, if still cached
    pub async fn current_refresh_token(&self, user_id: Uuid) -> IdentityErrorResult<Option<String>> {
        Ok(self.refresh_tokens.get(user_id).await?)
    }

    async fn issue_tokens(&self, user_id: Uuid) -> IdentityErrorResult<TokenPair> {
        let pair = self.tokens.issue_pair(user_id)?;
        self.refresh_tokens.put(user_id, &pair.refresh_token).await?;

        log::debug!("Issued token pair for {}", user_id);

        Ok(pair)
    }
}

#[track_caller]
fn unauthorized(message: &str) -> IdentityError {
    IdentityError::Unauthorized {
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
