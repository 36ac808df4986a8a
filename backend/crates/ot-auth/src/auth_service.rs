//! Sign-in, registration and auth-state flows.
//!
//! Every flow that signs an identity in holds the [`AuthSession`] guard until it
//! returns, so the auth-state observer never routes a half-finished sign-in.
//! Whatever path a flow takes, it ends with the identity either holding exactly
//! one profile or signed out again.

use crate::clock::Clock;
use crate::provider::{IdentityProvider, sign_out_quietly};
use crate::{
    AddUserRequest, AuthError, AuthSession, LandingView, ProfileConsistencyResolver,
    RegistrationRequest, Resolution, Result as AuthErrorResult, RetryPolicy,
};

use ot_config::{ResolverConfig, ValidationConfig};
use ot_core::{
    FacilitatorRecord, Identity, ProfileRecord, ProfileStore, Role, StoreError, StoreErrorKind,
    StoreResult, StudentRecord,
};

use std::sync::Arc;

use log::{debug, error, info, warn};

/// Result of a completed sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInOutcome {
    pub profile: ProfileRecord,
    pub landing: LandingView,
    /// The profile was created by this flow
    pub provisioned: bool,
}

pub struct AuthService {
    provider: Arc<dyn IdentityProvider>,
    store: Arc<dyn ProfileStore>,
    clock: Arc<dyn Clock>,
    resolver: ProfileConsistencyResolver,
    resolver_config: ResolverConfig,
    validation: ValidationConfig,
}

impl AuthService {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        store: Arc<dyn ProfileStore>,
        clock: Arc<dyn Clock>,
        resolver_config: ResolverConfig,
        validation: ValidationConfig,
    ) -> Self {
        let resolver = ProfileConsistencyResolver::new(Arc::clone(&store), Arc::clone(&clock));
        Self {
            provider,
            store,
            clock,
            resolver,
            resolver_config,
            validation,
        }
    }

    pub fn resolver(&self) -> &ProfileConsistencyResolver {
        &self.resolver
    }

    /// Email/password sign-in. Never provisions: a missing profile signs the
    /// identity out again.
    pub async fn sign_in_with_password(
        &self,
        session: &AuthSession,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<SignInOutcome> {
        let _guard = session.try_begin().ok_or_else(AuthError::flow_in_progress)?;

        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::validation(
                "email",
                "Please enter both email and password",
            ));
        }

        let identity = self.provider.sign_in_with_password(email, password).await?;
        info!("Password sign-in accepted for {}", identity.uid);

        let policy = RetryPolicy::password(&self.resolver_config);
        match self.resolve_or_sign_out(&identity, &policy).await? {
            Resolution::Found(profile) => self.admit(profile, false).await,
            Resolution::NotFound => {
                error!(
                    "No profile for {} after {} attempts, signing out",
                    identity.uid, policy.max_attempts
                );
                sign_out_quietly(self.provider.as_ref()).await;
                Err(AuthError::profile_not_found(
                    &identity.uid,
                    policy.max_attempts,
                ))
            }
        }
    }

    /// Federated sign-in. A first-time identity gets a student profile.
    pub async fn sign_in_with_federated(
        &self,
        session: &AuthSession,
    ) -> AuthErrorResult<SignInOutcome> {
        let _guard = session.try_begin().ok_or_else(AuthError::flow_in_progress)?;

        let identity = self.provider.sign_in_with_federated().await?;
        info!("Federated sign-in accepted for {}", identity.uid);

        let policy = RetryPolicy::federated(&self.resolver_config);
        match self.resolve_or_sign_out(&identity, &policy).await? {
            Resolution::Found(profile) => self.admit(profile, false).await,
            Resolution::NotFound => self.provision_student(&identity).await,
        }
    }

    /// Public sign-up for students and facilitators.
    pub async fn register(
        &self,
        session: &AuthSession,
        request: &RegistrationRequest,
    ) -> AuthErrorResult<SignInOutcome> {
        let _guard = session.try_begin().ok_or_else(AuthError::flow_in_progress)?;

        let request = request.validated(&self.validation)?;
        debug!("Registering {} as {}", request.email, request.role);

        let identity = self
            .provider
            .create_account(&request.email, &request.password)
            .await?;
        self.set_display_name(&identity.uid, &request.name).await;

        let now = self.clock.now();
        let mut profile = ProfileRecord::new(
            identity.uid.clone(),
            request.name,
            request.email,
            request.role,
            now,
        );
        profile.last_login = Some(now);

        if let Err(e) = self.write_registration(&profile).await {
            error!("Registration for {} failed after account creation: {}", identity.uid, e);
            self.delete_identity_quietly(&identity.uid).await;
            sign_out_quietly(self.provider.as_ref()).await;
            return Err(AuthError::provisioning_failed(&identity.uid, e));
        }

        info!(
            "Registered {} as {} ({})",
            profile.uid, profile.role, profile.external_id
        );
        Ok(SignInOutcome {
            landing: LandingView::for_profile(&profile),
            profile,
            provisioned: true,
        })
    }

    /// Admin-created account. Any role, no companion record.
    pub async fn add_user(&self, request: &AddUserRequest) -> AuthErrorResult<ProfileRecord> {
        let request = request.validated(&self.validation)?;

        let identity = self
            .provider
            .create_account(&request.email, &request.password)
            .await?;
        self.set_display_name(&identity.uid, &request.name).await;

        let now = self.clock.now();
        let mut profile = ProfileRecord::new(
            identity.uid.clone(),
            request.name,
            request.email,
            request.role,
            now,
        );
        profile.last_login = Some(now);

        if let Err(e) = self.store.create_profile(&profile).await {
            error!("Profile for new user {} could not be stored: {}", identity.uid, e);
            self.delete_identity_quietly(&identity.uid).await;
            return Err(AuthError::provisioning_failed(&identity.uid, e));
        }

        info!(
            "Added user {} as {} ({})",
            profile.uid, profile.role, profile.external_id
        );
        Ok(profile)
    }

    pub async fn send_password_reset(&self, email: &str) -> AuthErrorResult<()> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AuthError::validation("email", "Please enter your email"));
        }

        self.provider.send_password_reset(email).await?;
        info!("Password reset requested");
        Ok(())
    }

    pub async fn sign_out(&self) -> AuthErrorResult<()> {
        self.provider.sign_out().await?;
        Ok(())
    }

    /// Background observer for provider auth-state changes.
    ///
    /// Returns where to send an already signed-in identity, or `None` when
    /// there is nothing to do (a flow owns the session, nobody is signed in,
    /// or the profile cannot be read).
    pub async fn on_auth_state_changed(
        &self,
        session: &AuthSession,
        identity: Option<&Identity>,
    ) -> Option<LandingView> {
        if session.is_busy() {
            debug!("Auth state changed during an active flow, skipping");
            return None;
        }

        let identity = identity?;
        let read = self.resolver.read_once(&identity.uid).await;
        if session.is_busy() {
            debug!("A flow started while reading {}, skipping", identity.uid);
            return None;
        }

        match read {
            Ok(Some(profile)) => Some(LandingView::for_profile(&profile)),
            Ok(None) => {
                warn!("Signed-in identity {} has no profile yet", identity.uid);
                None
            }
            Err(e) => {
                error!("Profile read for {} failed: {}", identity.uid, e);
                None
            }
        }
    }

    async fn resolve_or_sign_out(
        &self,
        identity: &Identity,
        policy: &RetryPolicy,
    ) -> AuthErrorResult<Resolution> {
        match self.resolver.resolve(identity, policy).await {
            Ok(resolution) => Ok(resolution),
            Err(e) => {
                sign_out_quietly(self.provider.as_ref()).await;
                Err(e)
            }
        }
    }

    async fn admit(
        &self,
        profile: ProfileRecord,
        provisioned: bool,
    ) -> AuthErrorResult<SignInOutcome> {
        if !profile.is_active() {
            warn!("Disabled account {} tried to sign in", profile.uid);
            sign_out_quietly(self.provider.as_ref()).await;
            return Err(AuthError::account_disabled(&profile.uid));
        }

        Ok(SignInOutcome {
            landing: LandingView::for_profile(&profile),
            profile,
            provisioned,
        })
    }

    async fn provision_student(&self, identity: &Identity) -> AuthErrorResult<SignInOutcome> {
        let profile = ProfileRecord::provisioned_student(identity, self.clock.now());

        if let Err(e) = self.store.create_profile(&profile).await {
            // The profile became visible after the read budget ran out. The
            // identity owns a profile, so it must not be deleted.
            if e.kind == StoreErrorKind::AlreadyExists {
                if let Ok(Some(existing)) = self.resolver.read_once(&identity.uid).await {
                    warn!("Profile for {} appeared during provisioning", identity.uid);
                    return self.admit(existing, false).await;
                }
                error!("Profile for {} exists but cannot be read", identity.uid);
                sign_out_quietly(self.provider.as_ref()).await;
                return Err(AuthError::provisioning_failed(&identity.uid, e));
            }

            error!("Provisioning profile for {} failed: {}", identity.uid, e);
            self.delete_identity_quietly(&identity.uid).await;
            sign_out_quietly(self.provider.as_ref()).await;
            return Err(AuthError::provisioning_failed(&identity.uid, e));
        }

        info!(
            "Provisioned student profile {} ({})",
            profile.uid, profile.external_id
        );

        if let Err(e) = self
            .store
            .create_student_record(&StudentRecord::empty(&profile.uid))
            .await
        {
            error!("Student record for {} was not created: {}", profile.uid, e);
        }

        Ok(SignInOutcome {
            landing: LandingView::StudentDashboard,
            profile,
            provisioned: true,
        })
    }

    /// Profile, read-back check and companion record for a new account.
    async fn write_registration(&self, profile: &ProfileRecord) -> StoreResult<()> {
        self.store.create_profile(profile).await?;

        if self.store.get_profile(&profile.uid).await?.is_none() {
            return Err(StoreError::other(format!(
                "Profile {} not readable after creation",
                profile.uid
            )));
        }

        match profile.parsed_role() {
            Ok(Role::Student) => {
                self.store
                    .create_student_record(&StudentRecord::empty(&profile.uid))
                    .await
            }
            Ok(Role::Facilitator) => {
                self.store
                    .create_facilitator_record(&FacilitatorRecord::empty(&profile.uid))
                    .await
            }
            Ok(Role::Admin) | Err(_) => Ok(()),
        }
    }

    async fn set_display_name(&self, uid: &str, name: &str) {
        if let Err(e) = self.provider.update_display_name(uid, name).await {
            warn!("Display name for {} not updated: {}", uid, e);
        }
    }

    async fn delete_identity_quietly(&self, uid: &str) {
        match self.provider.delete_identity(uid).await {
            Ok(()) => info!("Deleted identity {} after failed provisioning", uid),
            Err(e) => error!("Could not delete identity {}: {}", uid, e),
        }
    }
}
