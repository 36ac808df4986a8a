use crate::decode;
use crate::{DbError, Result as DbErrorResult};

use ot_core::{AccountStatus, ExternalId, ProfileRecord, ProfileUpdate, Role};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SELECT_COLUMNS: &str = r#"
    SELECT uid, name, email, role, external_id, photo_url, phone, bio, department,
           specialization, dob, gender, status, created_at, last_login
    FROM users
"#;

/// Profile documents, one per identity uid.
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new profile. Fails with a unique violation if the uid exists.
    pub async fn create(&self, profile: &ProfileRecord) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (
                                   uid, name, email, role, external_id, photo_url, phone, bio,
                                   department, specialization, dob, gender, status,
                                   created_at, last_login
                                   ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&profile.uid)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(&profile.role)
        .bind(profile.external_id.as_str())
        .bind(&profile.photo_url)
        .bind(&profile.phone)
        .bind(&profile.bio)
        .bind(&profile.department)
        .bind(&profile.specialization)
        .bind(&profile.dob)
        .bind(&profile.gender)
        .bind(profile.status.as_str())
        .bind(profile.created_at.timestamp_millis())
        .bind(profile.last_login.map(|dt| dt.timestamp_millis()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_uid(&self, uid: &str) -> DbErrorResult<Option<ProfileRecord>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE uid = ?"))
            .bind(uid)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    /// Apply the `Some` fields of `update` and return the stored result.
    pub async fn update_profile(
        &self,
        uid: &str,
        update: &ProfileUpdate,
    ) -> DbErrorResult<ProfileRecord> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET name = COALESCE(?, name),
                    phone = COALESCE(?, phone),
                    bio = COALESCE(?, bio),
                    department = COALESCE(?, department),
                    specialization = COALESCE(?, specialization),
                    dob = COALESCE(?, dob),
                    gender = COALESCE(?, gender)
                WHERE uid = ?
            "#,
        )
        .bind(&update.name)
        .bind(&update.phone)
        .bind(&update.bio)
        .bind(&update.department)
        .bind(&update.specialization)
        .bind(&update.dob)
        .bind(&update.gender)
        .bind(uid)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", uid));
        }

        self.find_by_uid(uid)
            .await?
            .ok_or_else(|| DbError::not_found("User", uid))
    }

    pub async fn touch_last_login(&self, uid: &str, at: DateTime<Utc>) -> DbErrorResult<()> {
        let result = sqlx::query("UPDATE users SET last_login = ? WHERE uid = ?")
            .bind(at.timestamp_millis())
            .bind(uid)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", uid));
        }
        Ok(())
    }

    pub async fn set_status(&self, uid: &str, status: AccountStatus) -> DbErrorResult<()> {
        let result = sqlx::query("UPDATE users SET status = ? WHERE uid = ?")
            .bind(status.as_str())
            .bind(uid)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", uid));
        }
        Ok(())
    }

    /// All profiles, newest first.
    pub async fn list_all(&self) -> DbErrorResult<Vec<ProfileRecord>> {
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC, uid"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::map_row).collect()
    }

    pub async fn list_by_role(&self, role: Role) -> DbErrorResult<Vec<ProfileRecord>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE role = ? ORDER BY created_at DESC, uid"
        ))
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    pub async fn count_by_role(&self, role: Role) -> DbErrorResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = ?")
            .bind(role.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    fn map_row(r: &SqliteRow) -> DbErrorResult<ProfileRecord> {
        let status: String = r.try_get("status")?;
        let created_at: i64 = r.try_get("created_at")?;
        let last_login: Option<i64> = r.try_get("last_login")?;

        Ok(ProfileRecord {
            uid: r.try_get("uid")?,
            name: r.try_get("name")?,
            email: r.try_get("email")?,
            // Unknown roles are kept as-is and routed at the edge
            role: r.try_get("role")?,
            external_id: ExternalId::from_stored(r.try_get::<String, _>("external_id")?),
            photo_url: r.try_get("photo_url")?,
            phone: r.try_get("phone")?,
            bio: r.try_get("bio")?,
            department: r.try_get("department")?,
            specialization: r.try_get("specialization")?,
            dob: r.try_get("dob")?,
            gender: r.try_get("gender")?,
            status: AccountStatus::from_str(&status).map_err(|e| {
                DbError::invalid(format!("Invalid AccountStatus in users.status: {}", e))
            })?,
            created_at: decode::timestamp("users.created_at", created_at)?,
            last_login: last_login
                .map(|ms| decode::timestamp("users.last_login", ms))
                .transpose()?,
        })
    }
}
