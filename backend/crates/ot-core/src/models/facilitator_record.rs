use serde::{Deserialize, Serialize};

/// Companion record created next to every facilitator profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilitatorRecord {
    pub uid: String,
    pub assigned_students: Vec<String>,
    pub created_modules: Vec<String>,
    pub created_tests: Vec<String>,
}

impl FacilitatorRecord {
    pub fn empty(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }
}
