use crate::error::{CliError, Result as CliErrorResult};
use crate::Context;

use ot_core::{Grade, GradeDistribution, GradeSummary, progress_series};
use ot_db::{GradeRepository, SortOrder, TestRepository, UserRepository};

use chrono::Utc;
use clap::Subcommand;
use log::info;
use serde_json::{Value, json};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum GradeCommands {
    /// Record a test result
    Record {
        #[arg(long)]
        student_id: String,

        /// Test ID (UUID)
        #[arg(long)]
        test_id: Uuid,

        /// Score, 0-100
        #[arg(long, allow_negative_numbers = true)]
        score: i64,
    },

    /// List grades, newest first
    List {
        /// Only this student's grades
        #[arg(long)]
        student_id: Option<String>,
    },

    /// Mark a grade as reviewed
    Review {
        /// Grade ID (UUID)
        id: Uuid,
    },

    /// Average, GPA, letter distribution and progress for a student
    Summary { student_id: String },
}

impl GradeCommands {
    pub async fn execute(self, ctx: &Context) -> CliErrorResult<Value> {
        let grades = GradeRepository::new(ctx.pool.clone());

        match self {
            GradeCommands::Record {
                student_id,
                test_id,
                score,
            } => {
                let student = UserRepository::new(ctx.pool.clone())
                    .find_by_uid(&student_id)
                    .await?
                    .ok_or_else(|| CliError::not_found("User", &student_id))?;

                let tests = TestRepository::new(ctx.pool.clone());
                let test = tests
                    .find_by_id(test_id)
                    .await?
                    .ok_or_else(|| CliError::not_found("Test", test_id))?;

                let grade = Grade::new(&student, &test, score, Utc::now())?;
                grades.record_submission(&grade).await?;
                info!(
                    "Recorded grade {} for {} on {}",
                    grade.id, grade.student_id, grade.test_id
                );

                Ok(serde_json::to_value(grade)?)
            }
            GradeCommands::List { student_id } => {
                let list = match student_id {
                    Some(id) => {
                        grades
                            .list_by_student(&id, SortOrder::Descending, None)
                            .await?
                    }
                    None => grades.list_all().await?,
                };
                Ok(json!({ "grades": list }))
            }
            GradeCommands::Review { id } => {
                grades.mark_reviewed(id).await?;
                let grade = grades
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| CliError::not_found("Grade", id))?;
                Ok(serde_json::to_value(grade)?)
            }
            GradeCommands::Summary { student_id } => {
                let list = grades
                    .list_by_student(&student_id, SortOrder::Ascending, None)
                    .await?;
                Ok(json!({
                    "student_id": student_id,
                    "summary": GradeSummary::from_grades(&list),
                    "distribution": GradeDistribution::from_grades(&list),
                    "progress": progress_series(&list),
                }))
            }
        }
    }
}
