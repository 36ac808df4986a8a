//! Errors reported by document store adapters.
//!
//! Callers decide what to do with a failure by its [`StoreErrorKind`], never by
//! inspecting the message text.

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Classification of a store failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreErrorKind {
    /// Network or service hiccup; the same call may succeed later.
    Unavailable,
    /// The store refused the operation (rules, credentials, read-only).
    PermissionDenied,
    /// A document with the same key already exists.
    AlreadyExists,
    /// A stored document could not be decoded into its model.
    Corrupt,
    /// Anything else.
    Other,
}

impl StoreErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unavailable => "unavailable",
            Self::PermissionDenied => "permission_denied",
            Self::AlreadyExists => "already_exists",
            Self::Corrupt => "corrupt",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for StoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("Store error ({kind}): {message} {location}")]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub message: String,
    pub location: ErrorLocation,
}

impl StoreError {
    #[track_caller]
    pub fn new(kind: StoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Unavailable, message)
    }

    #[track_caller]
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::PermissionDenied, message)
    }

    #[track_caller]
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::AlreadyExists, message)
    }

    #[track_caller]
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Corrupt, message)
    }

    #[track_caller]
    pub fn other(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Other, message)
    }

    /// Whether retrying the same call may succeed.
    pub fn is_transient(&self) -> bool {
        self.kind == StoreErrorKind::Unavailable
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
