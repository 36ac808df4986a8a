use crate::error::{CliError, Result as CliErrorResult};
use crate::Context;

use ot_core::{Question, Test};
use ot_db::{ModuleRepository, TestRepository, UserRepository};

use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Subcommand;
use log::{info, warn};
use serde_json::{Value, json};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum TestCommands {
    /// Create a test from a JSON question list
    Create {
        #[arg(long)]
        title: String,

        /// Module the test belongs to (UUID)
        #[arg(long)]
        module_id: Option<Uuid>,

        /// Time limit in minutes
        #[arg(long)]
        duration: u32,

        #[arg(long, default_value = "")]
        description: String,

        /// Author's user ID
        #[arg(long)]
        created_by: String,

        /// Make the test visible to students immediately
        #[arg(long)]
        visible: bool,

        /// JSON file with an array of questions
        #[arg(long)]
        questions_file: PathBuf,
    },

    /// List tests, newest first
    List {
        /// Only tests visible to students
        #[arg(long)]
        visible_only: bool,
    },

    /// Show or hide a test for students
    Visibility {
        /// Test ID (UUID)
        id: Uuid,

        #[arg(action = clap::ArgAction::Set)]
        visible: bool,
    },
}

impl TestCommands {
    pub async fn execute(self, ctx: &Context) -> CliErrorResult<Value> {
        let tests = TestRepository::new(ctx.pool.clone());

        match self {
            TestCommands::Create {
                title,
                module_id,
                duration,
                description,
                created_by,
                visible,
                questions_file,
            } => {
                let author = UserRepository::new(ctx.pool.clone())
                    .find_by_uid(&created_by)
                    .await?
                    .ok_or_else(|| CliError::not_found("User", &created_by))?;

                let module = match module_id {
                    Some(id) => {
                        let found = ModuleRepository::new(ctx.pool.clone())
                            .find_by_id(id)
                            .await?;
                        if found.is_none() {
                            warn!(
                                "Module {} not found, filing test under the general module",
                                id
                            );
                        }
                        found
                    }
                    None => None,
                };

                let questions = read_questions(&questions_file)?;
                let test = Test::new(
                    &title,
                    module_id,
                    module.as_ref(),
                    duration,
                    &description,
                    visible,
                    questions,
                    &author,
                    Utc::now(),
                )?;
                tests.create(&test).await?;
                info!(
                    "Created test {} with {} questions",
                    test.id,
                    test.questions.len()
                );

                Ok(serde_json::to_value(test)?)
            }
            TestCommands::List { visible_only } => {
                let list = if visible_only {
                    tests.list_visible(None).await?
                } else {
                    tests.list_all().await?
                };
                Ok(json!({ "tests": list }))
            }
            TestCommands::Visibility { id, visible } => {
                tests.set_visibility(id, visible).await?;
                let test = tests
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| CliError::not_found("Test", id))?;
                Ok(serde_json::to_value(test)?)
            }
        }
    }
}

/// Parse a question list, trimming text and dropping blank options.
pub(crate) fn read_questions(path: &Path) -> CliErrorResult<Vec<Question>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        CliError::invalid_input(format!("Cannot read {}: {}", path.display(), e))
    })?;

    let raw: Vec<Question> = serde_json::from_str(&contents).map_err(|e| {
        CliError::invalid_input(format!("Malformed questions in {}: {}", path.display(), e))
    })?;

    raw.into_iter()
        .map(|q| {
            Question::new(
                &q.text,
                q.question_type,
                q.options,
                &q.correct_answer,
                q.points,
            )
            .map_err(CliError::from)
        })
        .collect()
}
