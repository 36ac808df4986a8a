mod registration;

use crate::provider::{IdentityProvider, ProviderError, ProviderErrorKind, ProviderResult};
use crate::{AuthFlowGuard, AuthService, AuthSession, Clock};

use ot_config::{ResolverConfig, ValidationConfig};
use ot_core::{
    FacilitatorRecord, Identity, ProfileRecord, ProfileStore, Role, StoreError, StoreErrorKind,
    StoreResult, StudentRecord,
};

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
}

pub(crate) fn identity(uid: &str) -> Identity {
    Identity::new(uid, format!("{}@example.com", uid))
}

pub(crate) fn profile(uid: &str, role: Role) -> ProfileRecord {
    ProfileRecord::new(
        uid,
        format!("User {}", uid),
        format!("{}@example.com", uid),
        role,
        fixed_now(),
    )
}

// =========================================================================
// Scripted profile store
// =========================================================================

#[derive(Default)]
pub(crate) struct StoreState {
    pub profiles: HashMap<String, ProfileRecord>,
    /// Reads that report "absent" even though the profile exists
    pub hidden_reads: u32,
    /// Reads that fail with this kind before behaving normally
    pub failing_reads: Vec<StoreErrorKind>,
    pub fail_create_profile: Option<StoreErrorKind>,
    pub fail_companion: Option<StoreErrorKind>,
    pub fail_touch: bool,
    pub reads: u32,
    pub created_profiles: Vec<ProfileRecord>,
    pub student_records: Vec<StudentRecord>,
    pub facilitator_records: Vec<FacilitatorRecord>,
    pub touches: Vec<(String, DateTime<Utc>)>,
    /// Session a competing flow claims while the next read is in flight
    pub claim_during_read: Option<AuthSession>,
    pub held_guard: Option<AuthFlowGuard>,
}

#[derive(Default)]
pub(crate) struct FakeStore {
    pub state: Mutex<StoreState>,
}

impl FakeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_profile(profile: ProfileRecord) -> Arc<Self> {
        let store = Self::new();
        store.insert(profile);
        store
    }

    pub fn insert(&self, profile: ProfileRecord) {
        self.state
            .lock()
            .unwrap()
            .profiles
            .insert(profile.uid.clone(), profile);
    }

    pub fn hide_for(&self, reads: u32) {
        self.state.lock().unwrap().hidden_reads = reads;
    }

    pub fn fail_reads(&self, kinds: Vec<StoreErrorKind>) {
        self.state.lock().unwrap().failing_reads = kinds;
    }

    pub fn reads(&self) -> u32 {
        self.state.lock().unwrap().reads
    }

    pub fn snapshot<T>(&self, f: impl FnOnce(&StoreState) -> T) -> T {
        f(&self.state.lock().unwrap())
    }

    pub fn update(&self, f: impl FnOnce(&mut StoreState)) {
        f(&mut self.state.lock().unwrap())
    }
}

#[async_trait]
impl ProfileStore for FakeStore {
    async fn get_profile(&self, uid: &str) -> StoreResult<Option<ProfileRecord>> {
        let mut state = self.state.lock().unwrap();
        state.reads += 1;
        if let Some(session) = state.claim_during_read.take() {
            state.held_guard = session.try_begin();
        }

        if !state.failing_reads.is_empty() {
            let kind = state.failing_reads.remove(0);
            return Err(StoreError::new(kind, "scripted read failure"));
        }
        if state.hidden_reads > 0 {
            state.hidden_reads -= 1;
            return Ok(None);
        }
        Ok(state.profiles.get(uid).cloned())
    }

    async fn create_profile(&self, profile: &ProfileRecord) -> StoreResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(kind) = state.fail_create_profile {
            return Err(StoreError::new(kind, "scripted create failure"));
        }
        if state.profiles.contains_key(&profile.uid) {
            return Err(StoreError::already_exists(profile.uid.clone()));
        }
        state.profiles.insert(profile.uid.clone(), profile.clone());
        state.created_profiles.push(profile.clone());
        Ok(())
    }

    async fn touch_last_login(&self, uid: &str, at: DateTime<Utc>) -> StoreResult<()> {
        let mut state = self.state.lock().unwrap();
        state.touches.push((uid.to_string(), at));
        if state.fail_touch {
            return Err(StoreError::unavailable("scripted touch failure"));
        }
        if let Some(profile) = state.profiles.get_mut(uid) {
            profile.last_login = Some(at);
        }
        Ok(())
    }

    async fn create_student_record(&self, record: &StudentRecord) -> StoreResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(kind) = state.fail_companion {
            return Err(StoreError::new(kind, "scripted companion failure"));
        }
        state.student_records.push(record.clone());
        Ok(())
    }

    async fn create_facilitator_record(&self, record: &FacilitatorRecord) -> StoreResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(kind) = state.fail_companion {
            return Err(StoreError::new(kind, "scripted companion failure"));
        }
        state.facilitator_records.push(record.clone());
        Ok(())
    }
}

// =========================================================================
// Recording clock
// =========================================================================

pub(crate) struct FakeClock {
    now: DateTime<Utc>,
    pub sleeps: Mutex<Vec<Duration>>,
}

impl FakeClock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            now: fixed_now(),
            sleeps: Mutex::new(Vec::new()),
        })
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

// =========================================================================
// Fake identity provider
// =========================================================================

#[derive(Default)]
pub(crate) struct ProviderState {
    pub identity: Option<Identity>,
    pub fail_sign_in: Option<ProviderErrorKind>,
    pub fail_create: Option<ProviderErrorKind>,
    pub fail_display_name: bool,
    pub fail_delete: bool,
    pub sign_in_calls: u32,
    pub create_calls: u32,
    pub sign_outs: u32,
    pub deleted: Vec<String>,
    pub display_names: Vec<(String, String)>,
    pub resets: Vec<String>,
}

#[derive(Default)]
pub(crate) struct FakeProvider {
    pub state: Mutex<ProviderState>,
}

impl FakeProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Provider that accepts every sign-in as `identity`.
    pub fn signing_in_as(identity: Identity) -> Arc<Self> {
        let provider = Self::default();
        provider.state.lock().unwrap().identity = Some(identity);
        Arc::new(provider)
    }

    pub fn snapshot<T>(&self, f: impl FnOnce(&ProviderState) -> T) -> T {
        f(&self.state.lock().unwrap())
    }

    pub fn update(&self, f: impl FnOnce(&mut ProviderState)) {
        f(&mut self.state.lock().unwrap())
    }

    fn signed_in(&self) -> ProviderResult<Identity> {
        let mut state = self.state.lock().unwrap();
        state.sign_in_calls += 1;
        if let Some(kind) = state.fail_sign_in {
            return Err(ProviderError::new(kind, "scripted sign-in failure"));
        }
        state
            .identity
            .clone()
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::UserNotFound, "no identity"))
    }
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    async fn sign_in_with_password(
        &self,
        _email: &str,
        _password: &str,
    ) -> ProviderResult<Identity> {
        self.signed_in()
    }

    async fn sign_in_with_federated(&self) -> ProviderResult<Identity> {
        self.signed_in()
    }

    async fn create_account(&self, email: &str, _password: &str) -> ProviderResult<Identity> {
        let mut state = self.state.lock().unwrap();
        state.create_calls += 1;
        if let Some(kind) = state.fail_create {
            return Err(ProviderError::new(kind, "scripted create failure"));
        }
        let identity = Identity::new(format!("new-{}", state.create_calls), email);
        state.identity = Some(identity.clone());
        Ok(identity)
    }

    async fn update_display_name(&self, uid: &str, display_name: &str) -> ProviderResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_display_name {
            return Err(ProviderError::new(
                ProviderErrorKind::NetworkRequestFailed,
                "scripted display name failure",
            ));
        }
        state
            .display_names
            .push((uid.to_string(), display_name.to_string()));
        Ok(())
    }

    async fn delete_identity(&self, uid: &str) -> ProviderResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_delete {
            return Err(ProviderError::new(
                ProviderErrorKind::RequiresRecentLogin,
                "scripted delete failure",
            ));
        }
        state.deleted.push(uid.to_string());
        Ok(())
    }

    async fn sign_out(&self) -> ProviderResult<()> {
        self.state.lock().unwrap().sign_outs += 1;
        Ok(())
    }

    async fn send_password_reset(&self, email: &str) -> ProviderResult<()> {
        self.state.lock().unwrap().resets.push(email.to_string());
        Ok(())
    }

    async fn current_identity(&self) -> Option<Identity> {
        self.state.lock().unwrap().identity.clone()
    }
}

pub(crate) fn service(
    provider: &Arc<FakeProvider>,
    store: &Arc<FakeStore>,
    clock: &Arc<FakeClock>,
) -> AuthService {
    AuthService::new(
        provider.clone(),
        store.clone(),
        clock.clone(),
        ResolverConfig::default(),
        ValidationConfig::default(),
    )
}
