pub mod user;
pub mod user_state;
pub mod version;
