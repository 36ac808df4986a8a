pub mod auth_service;
pub mod clock;
pub mod dashboard_gate;
pub mod error;
pub mod landing_view;
pub mod provider;
pub mod registration_request;
pub mod resolver;
pub mod retry_policy;
pub mod session;

pub use auth_service::{AuthService, SignInOutcome};
pub use clock::{Clock, TokioClock};
pub use dashboard_gate::DashboardGate;
pub use error::{AuthError, Result};
pub use landing_view::LandingView;
pub use provider::{IdentityProvider, ProviderError, ProviderErrorKind, ProviderResult};
pub use registration_request::{AddUserRequest, RegistrationRequest};
pub use resolver::{ProfileConsistencyResolver, Resolution};
pub use retry_policy::RetryPolicy;
pub use session::{AuthFlowGuard, AuthSession};

#[cfg(test)]
mod tests;
