use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// Partial update submitted from a profile page. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub department: Option<String>,
    pub specialization: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
}

impl ProfileUpdate {
    /// Trim every field and reject an empty name.
    #[track_caller]
    pub fn normalized(self, max_name_length: usize) -> CoreErrorResult<Self> {
        let trim = |value: Option<String>| value.map(|v| v.trim().to_string());
        let name = trim(self.name);

        if let Some(name) = &name {
            if name.is_empty() {
                return Err(CoreError::validation("name", "Name cannot be empty"));
            }
            if name.chars().count() > max_name_length {
                return Err(CoreError::validation(
                    "name",
                    format!("Name must be at most {max_name_length} characters"),
                ));
            }
        }

        Ok(Self {
            name,
            phone: trim(self.phone),
            bio: trim(self.bio),
            department: trim(self.department),
            specialization: trim(self.specialization),
            dob: trim(self.dob),
            gender: trim(self.gender),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.bio.is_none()
            && self.department.is_none()
            && self.specialization.is_none()
            && self.dob.is_none()
            && self.gender.is_none()
    }
}
