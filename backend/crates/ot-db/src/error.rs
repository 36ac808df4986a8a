use ot_core::{StoreError, StoreErrorKind};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

// Primary SQLite result codes (low byte of the extended code)
const SQLITE_PERM: i32 = 3;
const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;
const SQLITE_READONLY: i32 = 8;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid stored data: {message} {location}")]
    InvalidData {
        message: String,
        location: ErrorLocation,
    },

    #[error("Serialization error in {column}: {source} {location}")]
    Serialization {
        column: &'static str,
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Stored value that does not decode into its model type.
    #[track_caller]
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn serialization(column: &'static str, source: serde_json::Error) -> Self {
        Self::Serialization {
            column,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// How the store seam should classify this failure.
    pub fn store_kind(&self) -> StoreErrorKind {
        match self {
            Self::Sqlx { source, .. } => classify_sqlx(source),
            Self::InvalidData { .. } | Self::Serialization { .. } => StoreErrorKind::Corrupt,
            Self::Initialization { .. } | Self::Migration { .. } | Self::NotFound { .. } => {
                StoreErrorKind::Other
            }
        }
    }
}

fn classify_sqlx(source: &sqlx::Error) -> StoreErrorKind {
    match source {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreErrorKind::Unavailable
        }
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreErrorKind::AlreadyExists,
        sqlx::Error::Database(db) => {
            let primary = db
                .code()
                .and_then(|code| code.parse::<i32>().ok())
                .map(|code| code & 0xff);
            match primary {
                Some(SQLITE_BUSY | SQLITE_LOCKED) => StoreErrorKind::Unavailable,
                Some(SQLITE_PERM | SQLITE_READONLY) => StoreErrorKind::PermissionDenied,
                _ => StoreErrorKind::Other,
            }
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => StoreErrorKind::Corrupt,
        _ => StoreErrorKind::Other,
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for StoreError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        StoreError::new(err.store_kind(), err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
