use ident_core::User;

use serde::Serialize;

/// User DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub state: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub version: i32,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username,
            state: u.state.as_str().to_string(),
            created_at: u.created_at.timestamp(),
            updated_at: u.updated_at.timestamp(),
            version: u.version,
        }
    }
}
