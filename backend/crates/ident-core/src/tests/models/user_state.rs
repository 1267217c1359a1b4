use crate::UserState;

use std::str::FromStr;

#[test]
fn test_user_state_as_str() {
    assert_eq!(UserState::Enabled.as_str(), "enabled");
    assert_eq!(UserState::Disabled.as_str(), "disabled");
    assert_eq!(UserState::Deleted.as_str(), "deleted");
}

#[test]
fn test_user_state_from_str() {
    assert_eq!(UserState::from_str("enabled").unwrap(), UserState::Enabled);
    assert_eq!(
        UserState::from_str("disabled").unwrap(),
        UserState::Disabled
    );
    assert_eq!(UserState::from_str("deleted").unwrap(), UserState::Deleted);
    assert!(UserState::from_str("Enabled").is_err());
    assert!(UserState::from_str("archived").is_err());
}

#[test]
fn test_user_state_default() {
    assert_eq!(UserState::default(), UserState::Enabled);
}

#[test]
fn given_enabled_when_moving_to_disabled_or_deleted_then_allowed() {
    assert!(UserState::Enabled.can_transition_to(UserState::Disabled));
    assert!(UserState::Enabled.can_transition_to(UserState::Deleted));
}

#[test]
fn given_disabled_when_moving_to_deleted_then_allowed() {
    assert!(UserState::Disabled.can_transition_to(UserState::Deleted));
}

#[test]
fn given_disabled_when_reenabling_then_rejected() {
    let result = UserState::Disabled.transition_to(UserState::Enabled);

    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("disabled -> enabled"));
}

#[test]
fn given_deleted_when_moving_anywhere_then_rejected() {
    assert!(UserState::Deleted.is_terminal());
    for target in [UserState::Enabled, UserState::Disabled, UserState::Deleted] {
        assert!(!UserState::Deleted.can_transition_to(target));
    }
}

#[test]
fn given_same_state_when_transitioning_then_rejected() {
    assert!(!UserState::Enabled.can_transition_to(UserState::Enabled));
    assert!(!UserState::Disabled.can_transition_to(UserState::Disabled));
}
