//! Store port used by the authentication flows.
//!
//! The profile consistency resolver only needs a handful of document operations;
//! they are collected here so the flows can run against SQLite in production and
//! against scripted fakes in tests.

use crate::{FacilitatorRecord, ProfileRecord, StoreResult, StudentRecord};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Read the profile keyed by identity uid. `Ok(None)` means "not visible yet".
    async fn get_profile(&self, uid: &str) -> StoreResult<Option<ProfileRecord>>;

    /// Create (set) the profile document for `profile.uid`.
    async fn create_profile(&self, profile: &ProfileRecord) -> StoreResult<()>;

    /// Partial update of `last_login`.
    async fn touch_last_login(&self, uid: &str, at: DateTime<Utc>) -> StoreResult<()>;

    async fn create_student_record(&self, record: &StudentRecord) -> StoreResult<()>;

    async fn create_facilitator_record(&self, record: &FacilitatorRecord) -> StoreResult<()>;
}
