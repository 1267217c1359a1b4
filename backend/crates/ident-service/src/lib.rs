pub mod error;
pub mod identity_service;

pub use error::{IdentityError, Result};
pub use identity_service::IdentityService;
