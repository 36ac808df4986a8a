//! Application-level user record, keyed by the identity uid.

use crate::{AccountStatus, ExternalId, Identity, ProfileUpdate, Result as CoreErrorResult, Role};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub uid: String,
    pub name: String,
    pub email: String,
    /// Role exactly as stored. Kept raw so records with an unrecognised role stay
    /// readable; use [`ProfileRecord::parsed_role`] for the typed value.
    pub role: String,
    pub external_id: ExternalId,
    pub photo_url: String,
    pub phone: String,
    pub bio: String,
    pub department: String,
    pub specialization: String,
    pub dob: String,
    pub gender: String,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl ProfileRecord {
    /// Create a new active profile with empty optional fields.
    pub fn new(
        uid: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
            email: email.into(),
            role: role.as_str().to_string(),
            external_id: ExternalId::generate(role, now),
            photo_url: String::new(),
            phone: String::new(),
            bio: String::new(),
            department: String::new(),
            specialization: String::new(),
            dob: String::new(),
            gender: String::new(),
            status: AccountStatus::Active,
            created_at: now,
            last_login: None,
        }
    }

    /// Profile auto-provisioned for a first-time federated sign-in.
    pub fn provisioned_student(identity: &Identity, now: DateTime<Utc>) -> Self {
        let mut profile = Self::new(
            identity.uid.clone(),
            identity.fallback_name(),
            identity.email.clone(),
            Role::Student,
            now,
        );
        profile.photo_url = identity.photo_url.clone().unwrap_or_default();
        profile.last_login = Some(now);
        profile
    }

    #[track_caller]
    pub fn parsed_role(&self) -> CoreErrorResult<Role> {
        Role::from_str(&self.role)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role.as_str()
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    /// First word of the name, as shown in dashboard greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }

    /// Apply the `Some` fields of a partial update.
    pub fn apply(&mut self, update: &ProfileUpdate) {
        let fields = [
            (&update.name, &mut self.name),
            (&update.phone, &mut self.phone),
            (&update.bio, &mut self.bio),
            (&update.department, &mut self.department),
            (&update.specialization, &mut self.specialization),
            (&update.dob, &mut self.dob),
            (&update.gender, &mut self.gender),
        ];
        for (value, target) in fields {
            if let Some(value) = value {
                *target = value.clone();
            }
        }
    }
}
