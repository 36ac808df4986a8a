use crate::{
    CoreError, GradeLetter, PASSING_SCORE, ProfileRecord, Result as CoreErrorResult, Test,
};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A student's result for one test submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub id: Uuid,
    pub student_id: String,
    pub student_name: String,
    pub test_id: Uuid,
    pub test_title: String,
    pub module_name: String,
    /// Percentage, 0-100
    pub score: u8,
    /// Set once a facilitator has looked at the submission
    pub reviewed: bool,
    pub submitted_at: DateTime<Utc>,
}

impl Grade {
    #[track_caller]
    pub fn new(
        student: &ProfileRecord,
        test: &Test,
        score: i64,
        now: DateTime<Utc>,
    ) -> CoreErrorResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            student_id: student.uid.clone(),
            student_name: student.name.clone(),
            test_id: test.id,
            test_title: test.title.clone(),
            module_name: test.module_name.clone(),
            score: Self::validate_score(score)?,
            reviewed: false,
            submitted_at: now,
        })
    }

    #[track_caller]
    pub fn validate_score(score: i64) -> CoreErrorResult<u8> {
        u8::try_from(score)
            .ok()
            .filter(|s| *s <= 100)
            .ok_or_else(|| CoreError::InvalidScore {
                value: score,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub fn letter(&self) -> GradeLetter {
        GradeLetter::from_score(self.score)
    }

    pub fn passed(&self) -> bool {
        self.score >= PASSING_SCORE
    }
}
