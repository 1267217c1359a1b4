//! Password hashing with Argon2id.
//!
//! Hashes are PHC strings, so each one carries the parameters it was made
//! with and verification never depends on the current settings. Both
//! directions are CPU-bound and run on the blocking thread pool.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use error_location::ErrorLocation;

/// Argon2 cost settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CredentialHasher {
    params: Params,
}

impl CredentialHasher {
    #[track_caller]
    pub fn new(settings: HashParams) -> AuthErrorResult<Self> {
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|e| AuthError::PasswordHash {
            message: format!("Invalid argon2 parameters: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    pub async fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        let argon2 = self.argon2();
        let plaintext = plaintext.to_owned();

        run_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(plaintext.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| AuthError::PasswordHash {
                    message: format!("Failed to hash password: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })
        })
        .await
    }

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
    pub async fn verify(&self, plaintext: &str, stored_hash: &str) -> AuthErrorResult<bool> {
        let argon2 = self.argon2();
        let plaintext = plaintext.to_owned();
        let stored_hash = stored_hash.to_owned();

        run_blocking(move || {
            let parsed = PasswordHash::new(&stored_hash).map_err(|e| AuthError::PasswordHash {
                message: format!("Malformed stored hash: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            match argon2.verify_password(plaintext.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(e) => Err(AuthError::PasswordHash {
                    message: format!("Password verification failed: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        })
        .await
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

async fn run_blocking<T, F>(work: F) -> AuthErrorResult<T>
where
    F: FnOnce() -> AuthErrorResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AuthError::PasswordHash {
            message: format!("Hashing task failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?
}
