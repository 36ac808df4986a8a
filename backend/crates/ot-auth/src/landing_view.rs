use ot_core::{ProfileRecord, Role};

use std::str::FromStr;

use log::error;

/// Page a resolved profile is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandingView {
    StudentDashboard,
    FacilitatorDashboard,
    AdminDashboard,
    /// Public landing page; used for unknown roles
    Anonymous,
}

impl LandingView {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Student => Self::StudentDashboard,
            Role::Facilitator => Self::FacilitatorDashboard,
            Role::Admin => Self::AdminDashboard,
        }
    }

    /// Route by the stored role text. Unrecognised roles fall back to
    /// [`LandingView::Anonymous`] instead of failing.
    pub fn for_profile(profile: &ProfileRecord) -> Self {
        match Role::from_str(&profile.role) {
            Ok(role) => Self::for_role(role),
            Err(_) => {
                error!(
                    "Unknown role '{}' on profile {}, routing to public page",
                    profile.role, profile.uid
                );
                Self::Anonymous
            }
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::StudentDashboard => "student-dashboard.html",
            Self::FacilitatorDashboard => "facilitator-dashboard.html",
            Self::AdminDashboard => "admin-dashboard.html",
            Self::Anonymous => "index.html",
        }
    }
}

impl std::fmt::Display for LandingView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
