use crate::{FacilitatorRepository, StudentRepository, UserRepository};

use ot_core::{
    FacilitatorRecord, ProfileRecord, ProfileStore, StoreError, StoreResult, StudentRecord,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// [`ProfileStore`] backed by the SQLite repositories.
pub struct SqliteProfileStore {
    users: UserRepository,
    students: StudentRepository,
    facilitators: FacilitatorRepository,
}

impl SqliteProfileStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            students: StudentRepository::new(pool.clone()),
            facilitators: FacilitatorRepository::new(pool),
        }
    }
}

#[async_trait]
impl ProfileStore for SqliteProfileStore {
    async fn get_profile(&self, uid: &str) -> StoreResult<Option<ProfileRecord>> {
        self.users.find_by_uid(uid).await.map_err(StoreError::from)
    }

    async fn create_profile(&self, profile: &ProfileRecord) -> StoreResult<()> {
        self.users.create(profile).await.map_err(StoreError::from)
    }

    async fn touch_last_login(&self, uid: &str, at: DateTime<Utc>) -> StoreResult<()> {
        self.users
            .touch_last_login(uid, at)
            .await
            .map_err(StoreError::from)
    }

    async fn create_student_record(&self, record: &StudentRecord) -> StoreResult<()> {
        self.students.create(record).await.map_err(StoreError::from)
    }

    async fn create_facilitator_record(&self, record: &FacilitatorRecord) -> StoreResult<()> {
        self.facilitators
            .create(record)
            .await
            .map_err(StoreError::from)
    }
}
