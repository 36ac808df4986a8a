use crate::decode;
use crate::{DbError, Result as DbErrorResult};

use ot_core::Grade;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteExecutor, SqlitePool};
use uuid::Uuid;

const SELECT_COLUMNS: &str = r#"
    SELECT id, student_id, student_name, test_id, test_title, module_name, score,
           reviewed, submitted_at
    FROM grades
"#;

/// Order of grades by submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Oldest first, as used for progress charts
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    fn as_sql(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

pub struct GradeRepository {
    pool: SqlitePool,
}

impl GradeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn record(&self, grade: &Grade) -> DbErrorResult<()> {
        Self::insert(&self.pool, grade).await
    }

    /// Record a submission and bump the test's `submission_count` in one
    /// transaction. Nothing is written when the test does not exist.
    pub async fn record_submission(&self, grade: &Grade) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        Self::insert(&mut *tx, grade).await?;

        let result =
            sqlx::query("UPDATE tests SET submission_count = submission_count + 1 WHERE id = ?")
                .bind(grade.test_id.to_string())
                .execute(&mut *tx)
                .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Test", grade.test_id.to_string()));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn insert<'e, E>(executor: E, grade: &Grade) -> DbErrorResult<()>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query(
            r#"
                INSERT INTO grades (
                                    id, student_id, student_name, test_id, test_title,
                                    module_name, score, reviewed, submitted_at
                                    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(grade.id.to_string())
        .bind(&grade.student_id)
        .bind(&grade.student_name)
        .bind(grade.test_id.to_string())
        .bind(&grade.test_title)
        .bind(&grade.module_name)
        .bind(i64::from(grade.score))
        .bind(grade.reviewed)
        .bind(grade.submitted_at.timestamp_millis())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Grade>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    /// Every grade, most recent submission first.
    pub async fn list_all(&self) -> DbErrorResult<Vec<Grade>> {
        self.list_recent(None).await
    }

    pub async fn list_recent(&self, limit: Option<u32>) -> DbErrorResult<Vec<Grade>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} ORDER BY submitted_at DESC, id LIMIT ?"
        ))
        .bind(decode::limit(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    pub async fn list_by_student(
        &self,
        student_id: &str,
        order: SortOrder,
        limit: Option<u32>,
    ) -> DbErrorResult<Vec<Grade>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE student_id = ? ORDER BY submitted_at {}, id LIMIT ?",
            order.as_sql()
        ))
        .bind(student_id)
        .bind(decode::limit(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    /// Submissions a facilitator has not looked at yet, oldest first.
    pub async fn list_pending_review(&self) -> DbErrorResult<Vec<Grade>> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE reviewed = 0 ORDER BY submitted_at ASC, id"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    pub async fn mark_reviewed(&self, id: Uuid) -> DbErrorResult<()> {
        let result = sqlx::query("UPDATE grades SET reviewed = 1 WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Grade", id.to_string()));
        }
        Ok(())
    }

    fn map_row(r: &SqliteRow) -> DbErrorResult<Grade> {
        let id: String = r.try_get("id")?;
        let test_id: String = r.try_get("test_id")?;
        let score: i64 = r.try_get("score")?;
        let submitted_at: i64 = r.try_get("submitted_at")?;

        Ok(Grade {
            id: decode::uuid("grades.id", &id)?,
            student_id: r.try_get("student_id")?,
            student_name: r.try_get("student_name")?,
            test_id: decode::uuid("grades.test_id", &test_id)?,
            test_title: r.try_get("test_title")?,
            module_name: r.try_get("module_name")?,
            score: Grade::validate_score(score)
                .map_err(|e| DbError::invalid(format!("Invalid score in grades.score: {}", e)))?,
            reviewed: r.try_get("reviewed")?,
            submitted_at: decode::timestamp("grades.submitted_at", submitted_at)?,
        })
    }
}
