#![allow(dead_code)]

use ident_core::{User, UserCredential};

use chrono::Utc;

/// An unsaved enabled identity with a placeholder hash
pub fn create_test_credential(username: &str) -> UserCredential {
    UserCredential::new(
        User::new(username, Utc::now()),
        "$argon2id$v=19$m=8,t=1,p=1$placeholder$placeholder".to_string(),
    )
}
