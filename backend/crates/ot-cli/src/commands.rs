use crate::error::Result as CliErrorResult;
use crate::{
    Context, grade_commands::GradeCommands, module_commands::ModuleCommands,
    overview_commands::OverviewCommands, route_command, test_commands::TestCommands,
    user_commands::UserCommands,
};

use clap::Subcommand;
use serde_json::Value;

#[derive(Subcommand)]
pub enum Commands {
    /// User profile operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Module operations
    Module {
        #[command(subcommand)]
        action: ModuleCommands,
    },

    /// Test operations
    Test {
        #[command(subcommand)]
        action: TestCommands,
    },

    /// Grade operations
    Grade {
        #[command(subcommand)]
        action: GradeCommands,
    },

    /// Dashboard overview counts
    Overview {
        #[command(subcommand)]
        action: OverviewCommands,
    },

    /// Show which dashboard a user lands on
    Route {
        /// User ID (identity uid)
        uid: String,
    },
}

impl Commands {
    pub async fn execute(self, ctx: &Context) -> CliErrorResult<Value> {
        match self {
            Commands::User { action } => action.execute(ctx).await,
            Commands::Module { action } => action.execute(ctx).await,
            Commands::Test { action } => action.execute(ctx).await,
            Commands::Grade { action } => action.execute(ctx).await,
            Commands::Overview { action } => action.execute(ctx).await,
            Commands::Route { uid } => route_command::route(ctx, &uid).await,
        }
    }
}
