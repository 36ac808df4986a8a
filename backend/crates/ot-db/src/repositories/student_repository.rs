use crate::Result as DbErrorResult;
use crate::decode;

use ot_core::StudentRecord;

use sqlx::{Row, SqlitePool};

pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, record: &StudentRecord) -> DbErrorResult<()> {
        let enrolled_modules =
            decode::to_json("students.enrolled_modules", &record.enrolled_modules)?;
        let completed_tests = decode::to_json("students.completed_tests", &record.completed_tests)?;
        let grades = decode::to_json("students.grades", &record.grades)?;

        sqlx::query(
            r#"
                INSERT INTO students (uid, enrolled_modules, completed_tests, grades)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&record.uid)
        .bind(enrolled_modules)
        .bind(completed_tests)
        .bind(grades)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find(&self, uid: &str) -> DbErrorResult<Option<StudentRecord>> {
        let row = sqlx::query(
            r#"
                SELECT uid, enrolled_modules, completed_tests, grades
                FROM students
                WHERE uid = ?
            "#,
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| -> DbErrorResult<StudentRecord> {
            Ok(StudentRecord {
                uid: r.try_get("uid")?,
                enrolled_modules: decode::json_list(
                    "students.enrolled_modules",
                    r.try_get("enrolled_modules")?,
                )?,
                completed_tests: decode::json_list(
                    "students.completed_tests",
                    r.try_get("completed_tests")?,
                )?,
                grades: decode::json_list("students.grades", r.try_get("grades")?)?,
            })
        })
        .transpose()
    }
}
