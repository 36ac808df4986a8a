use crate::Result as DbErrorResult;
use crate::decode;

use ot_core::FacilitatorRecord;

use sqlx::{Row, SqlitePool};

pub struct FacilitatorRepository {
    pool: SqlitePool,
}

impl FacilitatorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, record: &FacilitatorRecord) -> DbErrorResult<()> {
        let assigned_students =
            decode::to_json("facilitators.assigned_students", &record.assigned_students)?;
        let created_modules =
            decode::to_json("facilitators.created_modules", &record.created_modules)?;
        let created_tests = decode::to_json("facilitators.created_tests", &record.created_tests)?;

        sqlx::query(
            r#"
                INSERT INTO facilitators (uid, assigned_students, created_modules, created_tests)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&record.uid)
        .bind(assigned_students)
        .bind(created_modules)
        .bind(created_tests)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find(&self, uid: &str) -> DbErrorResult<Option<FacilitatorRecord>> {
        let row = sqlx::query(
            r#"
                SELECT uid, assigned_students, created_modules, created_tests
                FROM facilitators
                WHERE uid = ?
            "#,
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| -> DbErrorResult<FacilitatorRecord> {
            Ok(FacilitatorRecord {
                uid: r.try_get("uid")?,
                assigned_students: decode::json_list(
                    "facilitators.assigned_students",
                    r.try_get("assigned_students")?,
                )?,
                created_modules: decode::json_list(
                    "facilitators.created_modules",
                    r.try_get("created_modules")?,
                )?,
                created_tests: decode::json_list(
                    "facilitators.created_tests",
                    r.try_get("created_tests")?,
                )?,
            })
        })
        .transpose()
    }
}
