use crate::decode;
use crate::{DbError, Result as DbErrorResult};

use ot_core::{Question, Test};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SELECT_COLUMNS: &str = r#"
    SELECT id, title, module_id, module_name, duration_minutes, description, visible,
           questions, created_by, created_by_name, created_at, submission_count
    FROM tests
"#;

pub struct TestRepository {
    pool: SqlitePool,
}

impl TestRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a test. `module_name` must already be resolved by the caller.
    pub async fn create(&self, test: &Test) -> DbErrorResult<()> {
        let questions = decode::to_json("tests.questions", &test.questions)?;

        sqlx::query(
            r#"
                INSERT INTO tests (
                                   id, title, module_id, module_name, duration_minutes,
                                   description, visible, questions, created_by,
                                   created_by_name, created_at, submission_count
                                   ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(test.id.to_string())
        .bind(&test.title)
        .bind(test.module_id.map(|id| id.to_string()))
        .bind(&test.module_name)
        .bind(i64::from(test.duration_minutes))
        .bind(&test.description)
        .bind(test.visible)
        .bind(questions)
        .bind(&test.created_by)
        .bind(&test.created_by_name)
        .bind(test.created_at.timestamp_millis())
        .bind(i64::from(test.submission_count))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Test>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    /// All tests, newest first.
    pub async fn list_all(&self) -> DbErrorResult<Vec<Test>> {
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::map_row).collect()
    }

    /// Tests offered to students, newest first.
    pub async fn list_visible(&self, limit: Option<u32>) -> DbErrorResult<Vec<Test>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE visible = 1 ORDER BY created_at DESC, id LIMIT ?"
        ))
        .bind(decode::limit(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    pub async fn list_by_creator(&self, created_by: &str) -> DbErrorResult<Vec<Test>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE created_by = ? ORDER BY created_at DESC, id"
        ))
        .bind(created_by)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    pub async fn set_visibility(&self, id: Uuid, visible: bool) -> DbErrorResult<()> {
        let result = sqlx::query("UPDATE tests SET visible = ? WHERE id = ?")
            .bind(visible)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Test", id.to_string()));
        }
        Ok(())
    }

    pub async fn increment_submission_count(&self, id: Uuid) -> DbErrorResult<()> {
        let result =
            sqlx::query("UPDATE tests SET submission_count = submission_count + 1 WHERE id = ?")
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Test", id.to_string()));
        }
        Ok(())
    }

    fn map_row(r: &SqliteRow) -> DbErrorResult<Test> {
        let id: String = r.try_get("id")?;
        let module_id: Option<String> = r.try_get("module_id")?;
        let questions: String = r.try_get("questions")?;
        let created_at: i64 = r.try_get("created_at")?;

        Ok(Test {
            id: decode::uuid("tests.id", &id)?,
            title: r.try_get("title")?,
            module_id: module_id
                .as_deref()
                .map(|m| decode::uuid("tests.module_id", m))
                .transpose()?,
            module_name: r.try_get("module_name")?,
            duration_minutes: decode::unsigned(
                "tests.duration_minutes",
                r.try_get("duration_minutes")?,
            )?,
            description: r.try_get("description")?,
            visible: r.try_get("visible")?,
            questions: serde_json::from_str::<Vec<Question>>(&questions)
                .map_err(|e| DbError::serialization("tests.questions", e))?,
            created_by: r.try_get("created_by")?,
            created_by_name: r.try_get("created_by_name")?,
            created_at: decode::timestamp("tests.created_at", created_at)?,
            submission_count: decode::unsigned(
                "tests.submission_count",
                r.try_get("submission_count")?,
            )?,
        })
    }
}
