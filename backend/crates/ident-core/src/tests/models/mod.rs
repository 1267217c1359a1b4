mod user;
mod user_state;
mod version;
