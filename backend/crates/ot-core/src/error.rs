use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid account status: {value} {location}")]
    InvalidStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid question type: {value} {location}")]
    InvalidQuestionType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid score: {value} (expected 0-100) {location}")]
    InvalidScore { value: i64, location: ErrorLocation },
}

impl CoreError {
    /// Creates a Validation error for a specific field at caller location.
    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::InvalidRole { .. } => Some("role"),
            Self::InvalidStatus { .. } => Some("status"),
            Self::InvalidQuestionType { .. } => Some("question_type"),
            Self::InvalidScore { .. } => Some("score"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
