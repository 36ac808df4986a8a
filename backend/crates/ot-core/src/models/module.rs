//! Course module authored by a facilitator.

use crate::{CoreError, ProfileRecord, Result as CoreErrorResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: Uuid,
    pub name: String,
    /// Short course code (e.g., "CS101")
    pub code: String,
    pub description: String,
    pub content: String,
    pub created_by: String,
    /// Author name copied at creation so listings need no profile lookup
    pub created_by_name: String,
    pub created_at: DateTime<Utc>,
}

impl Module {
    #[track_caller]
    pub fn new(
        name: &str,
        code: &str,
        description: &str,
        content: &str,
        author: &ProfileRecord,
        now: DateTime<Utc>,
    ) -> CoreErrorResult<Self> {
        let name = name.trim();
        let code = code.trim();
        if name.is_empty() {
            return Err(CoreError::validation("name", "Module name is required"));
        }
        if code.is_empty() {
            return Err(CoreError::validation("code", "Module code is required"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            code: code.to_string(),
            description: description.trim().to_string(),
            content: content.trim().to_string(),
            created_by: author.uid.clone(),
            created_by_name: author.name.clone(),
            created_at: now,
        })
    }
}
