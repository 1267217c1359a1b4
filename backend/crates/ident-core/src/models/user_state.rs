use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identity lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserState {
    /// Identity can authenticate
    #[default]
    Enabled,
    /// Identity exists but may not authenticate
    Disabled,
    /// Soft-deleted; terminal
    Deleted,
}

impl UserState {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
            Self::Deleted => "deleted",
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == Self::Deleted
    }

    /// Legal moves: enabled -> disabled, enabled -> deleted, disabled -> deleted.
    pub fn can_transition_to(&self, target: UserState) -> bool {
        matches!(
            (self, target),
            (Self::Enabled, Self::Disabled)
                | (Self::Enabled, Self::Deleted)
                | (Self::Disabled, Self::Deleted)
        )
    }

    #[track_caller]
    pub fn transition_to(&self, target: UserState) -> CoreErrorResult<UserState> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(CoreError::IllegalTransition {
                from: self.to_string(),
                to: target.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

impl FromStr for UserState {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "enabled" => Ok(Self::Enabled),
            "disabled" => Ok(Self::Disabled),
            "deleted" => Ok(Self::Deleted),
            _ => Err(CoreError::InvalidUserState {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UserState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
