use serde::{Deserialize, Serialize};

/// Companion record created next to every student profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub uid: String,
    pub enrolled_modules: Vec<String>,
    pub completed_tests: Vec<String>,
    pub grades: Vec<String>,
}

impl StudentRecord {
    pub fn empty(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }
}
