//! Read-after-write reconciliation between an authenticated identity and its
//! profile document.
//!
//! A profile written just before sign-in may not be readable yet. The resolver
//! re-reads it on a bounded schedule and reports `NotFound` once the budget is
//! spent; callers decide whether that means "sign out" or "provision".

use crate::clock::Clock;
use crate::{AuthError, Result as AuthErrorResult, RetryPolicy};

use ot_core::{Identity, ProfileRecord, ProfileStore};

use std::sync::Arc;

use log::{debug, info, warn};

/// Outcome of a bounded profile lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(ProfileRecord),
    NotFound,
}

impl Resolution {
    pub fn into_profile(self) -> Option<ProfileRecord> {
        match self {
            Self::Found(profile) => Some(profile),
            Self::NotFound => None,
        }
    }
}

#[derive(Clone)]
pub struct ProfileConsistencyResolver {
    store: Arc<dyn ProfileStore>,
    clock: Arc<dyn Clock>,
}

impl ProfileConsistencyResolver {
    pub fn new(store: Arc<dyn ProfileStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Look the profile up and, when found, record the login time.
    ///
    /// The `last_login` write is best effort: a failure is logged and the
    /// profile is still returned.
    pub async fn resolve(
        &self,
        identity: &Identity,
        policy: &RetryPolicy,
    ) -> AuthErrorResult<Resolution> {
        let resolution = self.resolve_without_touch(identity, policy).await?;

        if let Resolution::Found(profile) = &resolution
            && let Err(e) = self
                .store
                .touch_last_login(&profile.uid, self.clock.now())
                .await
        {
            warn!("Failed to update last login for {}: {}", profile.uid, e);
        }

        Ok(resolution)
    }

    /// Same lookup as [`resolve`](Self::resolve) with no writes.
    ///
    /// At most `policy.max_attempts` reads and one fewer waits. Absent
    /// documents and transient read failures use up an attempt; any other
    /// store failure is returned immediately.
    pub async fn resolve_without_touch(
        &self,
        identity: &Identity,
        policy: &RetryPolicy,
    ) -> AuthErrorResult<Resolution> {
        let uid = identity.uid.as_str();
        let max_attempts = policy.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            match self.store.get_profile(uid).await {
                Ok(Some(profile)) => {
                    if attempt > 1 {
                        info!("Profile for {} visible after {} attempts", uid, attempt);
                    }
                    return Ok(Resolution::Found(profile));
                }
                Ok(None) => {
                    debug!(
                        "Profile for {} not visible (attempt {}/{})",
                        uid, attempt, max_attempts
                    );
                }
                Err(e) if e.is_transient() => {
                    warn!(
                        "Transient profile read failure for {} (attempt {}/{}): {}",
                        uid, attempt, max_attempts, e
                    );
                }
                Err(e) => {
                    warn!(
                        "Profile read for {} failed on attempt {}: {}",
                        uid, attempt, e
                    );
                    return Err(AuthError::from(e));
                }
            }

            if attempt < max_attempts {
                self.clock.sleep(policy.delay_for(attempt)).await;
            }
        }

        info!(
            "Profile for {} not found after {} attempts",
            uid, max_attempts
        );
        Ok(Resolution::NotFound)
    }

    /// One read with no retry. Transient failures surface as
    /// [`AuthError::TransientRead`].
    pub async fn read_once(&self, uid: &str) -> AuthErrorResult<Option<ProfileRecord>> {
        match self.store.get_profile(uid).await {
            Ok(profile) => Ok(profile),
            Err(e) if e.is_transient() => Err(AuthError::transient_read(uid, e)),
            Err(e) => Err(AuthError::from(e)),
        }
    }
}
