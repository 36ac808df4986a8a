use crate::error::{CliError, Result as CliErrorResult};
use crate::Context;

use ot_core::{AdminOverview, FacilitatorOverview, Role, StudentOverview};
use ot_db::{GradeRepository, ModuleRepository, SortOrder, TestRepository, UserRepository};

use clap::Subcommand;
use serde_json::Value;

#[derive(Subcommand)]
pub enum OverviewCommands {
    /// Platform-wide counts
    Admin,

    /// Counts for a facilitator's dashboard
    Facilitator { uid: String },

    /// Counts for a student's dashboard
    Student { uid: String },
}

impl OverviewCommands {
    pub async fn execute(self, ctx: &Context) -> CliErrorResult<Value> {
        let users = UserRepository::new(ctx.pool.clone());
        let modules = ModuleRepository::new(ctx.pool.clone());

        match self {
            OverviewCommands::Admin => {
                let overview = AdminOverview {
                    students: users.count_by_role(Role::Student).await? as usize,
                    facilitators: users.count_by_role(Role::Facilitator).await? as usize,
                    modules: modules.count().await? as usize,
                };
                Ok(serde_json::to_value(overview)?)
            }
            OverviewCommands::Facilitator { uid } => {
                require_profile(&users, &uid).await?;

                let overview = FacilitatorOverview {
                    students: users.count_by_role(Role::Student).await? as usize,
                    own_modules: modules.list_by_creator(&uid).await?.len(),
                    own_tests: TestRepository::new(ctx.pool.clone())
                        .list_by_creator(&uid)
                        .await?
                        .len(),
                    pending_grades: GradeRepository::new(ctx.pool.clone())
                        .list_pending_review()
                        .await?
                        .len(),
                };
                Ok(serde_json::to_value(overview)?)
            }
            OverviewCommands::Student { uid } => {
                require_profile(&users, &uid).await?;

                let visible_tests = TestRepository::new(ctx.pool.clone())
                    .list_visible(None)
                    .await?
                    .len();
                let grades = GradeRepository::new(ctx.pool.clone())
                    .list_by_student(&uid, SortOrder::Descending, None)
                    .await?;

                let overview =
                    StudentOverview::new(modules.count().await? as usize, visible_tests, &grades);
                Ok(serde_json::to_value(overview)?)
            }
        }
    }
}

async fn require_profile(users: &UserRepository, uid: &str) -> CliErrorResult<()> {
    match users.find_by_uid(uid).await? {
        Some(_) => Ok(()),
        None => Err(CliError::not_found("User", uid)),
    }
}
