use crate::clock::Clock;
use crate::provider::{IdentityProvider, sign_out_quietly};
use crate::{
    AuthError, ProfileConsistencyResolver, Resolution, Result as AuthErrorResult, RetryPolicy,
};

use ot_config::ResolverConfig;
use ot_core::{Identity, ProfileRecord, ProfileStore, Role};

use std::sync::Arc;

use log::{info, warn};

/// Admission check run when a role dashboard is opened.
pub struct DashboardGate {
    provider: Arc<dyn IdentityProvider>,
    resolver: ProfileConsistencyResolver,
    policy: RetryPolicy,
}

impl DashboardGate {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        store: Arc<dyn ProfileStore>,
        clock: Arc<dyn Clock>,
        config: &ResolverConfig,
    ) -> Self {
        Self {
            provider,
            resolver: ProfileConsistencyResolver::new(store, clock),
            policy: RetryPolicy::dashboard(config),
        }
    }

    /// Return the viewer's profile if it may see the `required` dashboard.
    /// Any refusal after a successful sign-in signs the identity out.
    pub async fn enter(
        &self,
        identity: Option<&Identity>,
        required: Role,
    ) -> AuthErrorResult<ProfileRecord> {
        let identity = identity.ok_or_else(AuthError::not_signed_in)?;

        let profile = match self
            .resolver
            .resolve_without_touch(identity, &self.policy)
            .await?
        {
            Resolution::Found(profile) => profile,
            Resolution::NotFound => {
                warn!(
                    "{} dashboard: no profile for {} after {} attempts",
                    required, identity.uid, self.policy.max_attempts
                );
                sign_out_quietly(self.provider.as_ref()).await;
                return Err(AuthError::profile_not_found(
                    &identity.uid,
                    self.policy.max_attempts,
                ));
            }
        };

        if !profile.has_role(required) {
            warn!(
                "{} dashboard refused for {} with role '{}'",
                required, profile.uid, profile.role
            );
            sign_out_quietly(self.provider.as_ref()).await;
            return Err(AuthError::access_denied(required, profile.role));
        }

        info!("{} dashboard opened by {}", required, profile.uid);
        Ok(profile)
    }
}
