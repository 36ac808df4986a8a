use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Application role stored on a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Facilitator,
    Admin,
}

impl Role {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Facilitator => "facilitator",
            Self::Admin => "admin",
        }
    }

    /// Prefix of the human-facing external id (`STU123456`).
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Student => "STU",
            Self::Facilitator => "FAC",
            Self::Admin => "ADM",
        }
    }

    /// Roles a visitor may pick on the public registration form.
    pub fn is_self_registrable(&self) -> bool {
        matches!(self, Self::Student | Self::Facilitator)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "student" => Ok(Self::Student),
            "facilitator" => Ok(Self::Facilitator),
            "admin" => Ok(Self::Admin),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
