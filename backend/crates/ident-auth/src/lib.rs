pub mod claims;
pub mod credential_hasher;
pub mod error;
pub mod refresh_token_cache;
pub mod refresh_token_store;
pub mod token_service;

pub use claims::Claims;
pub use credential_hasher::{CredentialHasher, HashParams};
pub use error::{AuthError, Result};
pub use refresh_token_cache::{MemoryRefreshTokenCache, RefreshTokenCache};
pub use refresh_token_store::RefreshTokenStore;
pub use token_service::{TokenPair, TokenService};
