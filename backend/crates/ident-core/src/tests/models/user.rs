use crate::{User, UserCredential, UserState};

use chrono::{Duration, Utc};
use googletest::prelude::*;

#[test]
fn given_new_user_then_enabled_unpersisted_with_equal_timestamps() {
    let now = Utc::now();

    let user = User::new("alice", now);

    assert_that!(user.is_persisted(), is_false());
    assert_that!(user.state, eq(UserState::Enabled));
    assert_that!(user.version, eq(0));
    assert_that!(user.created_at, eq(user.updated_at));
}

#[test]
fn given_user_when_changed_then_version_increments_and_identity_is_kept() {
    let now = Utc::now();
    let mut user = User::new("alice", now);
    user.id = uuid::Uuid::new_v4();
    user.version = 7;

    let changed = user.changed_to(UserState::Disabled, now + Duration::seconds(5));

    assert_that!(changed.id, eq(user.id));
    assert_that!(changed.username, eq("alice"));
    assert_that!(changed.created_at, eq(user.created_at));
    assert_that!(changed.state, eq(UserState::Disabled));
    assert_that!(changed.version, eq(8));
    assert_that!(changed.updated_at, eq(now + Duration::seconds(5)));
}

#[test]
fn given_clock_behind_last_update_when_changed_then_update_timestamp_does_not_regress() {
    let now = Utc::now();
    let user = User::new("alice", now);

    let changed = user.changed_to(UserState::Deleted, now - Duration::minutes(10));

    assert_that!(changed.updated_at, eq(now));
}

#[test]
fn given_credential_when_debug_formatted_then_hash_is_redacted() {
    let credential = UserCredential::new(
        User::new("alice", Utc::now()),
        "$argon2id$v=19$secret-material".to_string(),
    );

    let rendered = format!("{:?}", credential);

    assert_that!(rendered, contains_substring("<redacted>"));
    assert_that!(rendered, not(contains_substring("secret-material")));
}
