//! Identity provider port.
//!
//! Credential checks, sessions, password reset and federated sign-in are owned by
//! an external provider. The flows only see this trait.

use ot_core::Identity;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use thiserror::Error;

/// Failure categories reported by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorKind {
    UserNotFound,
    WrongPassword,
    EmailAlreadyInUse,
    WeakPassword,
    InvalidEmail,
    UserDisabled,
    TooManyRequests,
    NetworkRequestFailed,
    PopupClosedByUser,
    CancelledPopupRequest,
    PopupBlocked,
    InvalidCredential,
    OperationNotAllowed,
    RequiresRecentLogin,
    Other,
}

impl ProviderErrorKind {
    /// Provider wire code, for logs only.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound => "auth/user-not-found",
            Self::WrongPassword => "auth/wrong-password",
            Self::EmailAlreadyInUse => "auth/email-already-in-use",
            Self::WeakPassword => "auth/weak-password",
            Self::InvalidEmail => "auth/invalid-email",
            Self::UserDisabled => "auth/user-disabled",
            Self::TooManyRequests => "auth/too-many-requests",
            Self::NetworkRequestFailed => "auth/network-request-failed",
            Self::PopupClosedByUser => "auth/popup-closed-by-user",
            Self::CancelledPopupRequest => "auth/cancelled-popup-request",
            Self::PopupBlocked => "auth/popup-blocked",
            Self::InvalidCredential => "auth/invalid-credential",
            Self::OperationNotAllowed => "auth/operation-not-allowed",
            Self::RequiresRecentLogin => "auth/requires-recent-login",
            Self::Other => "auth/unknown",
        }
    }

    /// Short message safe to show to an end user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::UserNotFound => "No account found with this email",
            Self::WrongPassword => "Incorrect password",
            Self::EmailAlreadyInUse => {
                "This email is already registered. Please use a different email or sign in."
            }
            Self::WeakPassword => "Password is too weak. Please use at least 6 characters.",
            Self::InvalidEmail => "Invalid email address. Please check your email format.",
            Self::UserDisabled => "This account has been disabled",
            Self::TooManyRequests => "Too many failed attempts. Please try again later",
            Self::NetworkRequestFailed => "Network error. Please check your connection",
            Self::PopupClosedByUser | Self::CancelledPopupRequest => "Sign-in cancelled",
            Self::PopupBlocked => "Popup was blocked. Please allow popups for this site",
            Self::InvalidCredential => {
                "Invalid credentials. Please check your email and password"
            }
            Self::OperationNotAllowed => "This sign-in method is not enabled",
            Self::RequiresRecentLogin => "Please sign in again to complete this action",
            Self::Other => "An error occurred. Please try again",
        }
    }
}

impl std::fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug)]
#[error("Identity provider error ({kind}): {message} {location}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
    pub location: ErrorLocation,
}

impl ProviderError {
    #[track_caller]
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in_with_password(&self, email: &str, password: &str)
    -> ProviderResult<Identity>;

    /// Interactive federated sign-in (popup or redirect on the client side).
    async fn sign_in_with_federated(&self) -> ProviderResult<Identity>;

    /// Create a password account. The new identity is signed in.
    async fn create_account(&self, email: &str, password: &str) -> ProviderResult<Identity>;

    async fn update_display_name(&self, uid: &str, display_name: &str) -> ProviderResult<()>;

    /// Remove an identity; used to roll back a half-finished registration.
    async fn delete_identity(&self, uid: &str) -> ProviderResult<()>;

    async fn sign_out(&self) -> ProviderResult<()>;

    async fn send_password_reset(&self, email: &str) -> ProviderResult<()>;

    async fn current_identity(&self) -> Option<Identity>;
}

/// Sign out during a rollback; a failure is logged, the original error wins.
pub(crate) async fn sign_out_quietly(provider: &dyn IdentityProvider) {
    if let Err(e) = provider.sign_out().await {
        log::error!("Sign-out during rollback failed: {}", e);
    }
}
