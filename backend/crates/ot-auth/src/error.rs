use crate::provider::{ProviderError, ProviderErrorKind};

use ot_core::{CoreError, Role, StoreError, StoreErrorKind};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Identity provider rejected the request ({kind}): {message} {location}")]
    Provider {
        kind: ProviderErrorKind,
        message: String,
        location: ErrorLocation,
    },

    #[error("Profile read for {uid} failed: {source} {location}")]
    TransientRead {
        uid: String,
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("No profile for {uid} after {attempts} attempts {location}")]
    ProfileNotFound {
        uid: String,
        attempts: u32,
        location: ErrorLocation,
    },

    #[error("Could not provision profile for {uid}: {source} {location}")]
    ProvisioningFailed {
        uid: String,
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Account {uid} is disabled {location}")]
    AccountDisabled { uid: String, location: ErrorLocation },

    #[error("Access denied: {required} required, profile has '{actual}' {location}")]
    AccessDenied {
        required: Role,
        actual: String,
        location: ErrorLocation,
    },

    #[error("Not signed in {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("Another sign-in flow is already running {location}")]
    FlowInProgress { location: ErrorLocation },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_not_found(uid: impl Into<String>, attempts: u32) -> Self {
        Self::ProfileNotFound {
            uid: uid.into(),
            attempts,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn provisioning_failed(uid: impl Into<String>, source: StoreError) -> Self {
        Self::ProvisioningFailed {
            uid: uid.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transient_read(uid: impl Into<String>, source: StoreError) -> Self {
        Self::TransientRead {
            uid: uid.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn account_disabled(uid: impl Into<String>) -> Self {
        Self::AccountDisabled {
            uid: uid.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn access_denied(required: Role, actual: impl Into<String>) -> Self {
        Self::AccessDenied {
            required,
            actual: actual.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_signed_in() -> Self {
        Self::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn flow_in_progress() -> Self {
        Self::FlowInProgress {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Provider { .. } => "PROVIDER_ERROR",
            Self::TransientRead { .. } => "TRANSIENT_READ",
            Self::ProfileNotFound { .. } => "PROFILE_NOT_FOUND",
            Self::ProvisioningFailed { .. } => "PROVISIONING_FAILED",
            Self::AccountDisabled { .. } => "ACCOUNT_DISABLED",
            Self::AccessDenied { .. } => "ACCESS_DENIED",
            Self::NotSignedIn { .. } => "NOT_SIGNED_IN",
            Self::FlowInProgress { .. } => "FLOW_IN_PROGRESS",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Store { .. } => "STORE_ERROR",
        }
    }

    /// Message for end users. Never contains provider codes or store details.
    pub fn user_message(&self) -> String {
        match self {
            Self::Provider { kind, .. } => kind.user_message().to_string(),
            Self::TransientRead { .. } => {
                "Network error. Please check your connection".to_string()
            }
            Self::ProfileNotFound { .. } => {
                "User profile not found. Please contact administrator.".to_string()
            }
            Self::ProvisioningFailed { source, .. } | Self::Store { source, .. }
                if source.kind == StoreErrorKind::PermissionDenied =>
            {
                "Permission denied. Please check database rules.".to_string()
            }
            Self::ProvisioningFailed { .. } => {
                "Could not create your profile. Please try again".to_string()
            }
            Self::AccountDisabled { .. } => "This account has been disabled".to_string(),
            Self::AccessDenied { .. } => {
                "Access denied. You do not have permission to view this page".to_string()
            }
            Self::NotSignedIn { .. } => "Please sign in to continue".to_string(),
            Self::FlowInProgress { .. } => "Sign-in already in progress".to_string(),
            Self::Validation { message, .. } => message.clone(),
            Self::Store { .. } => "An error occurred. Please try again".to_string(),
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

impl From<ProviderError> for AuthError {
    #[track_caller]
    fn from(err: ProviderError) -> Self {
        Self::Provider {
            kind: err.kind,
            message: err.message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let field = err.field().map(str::to_string);
        let message = match &err {
            CoreError::Validation { message, .. } => message.clone(),
            other => other.to_string(),
        };
        Self::Validation {
            message,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
