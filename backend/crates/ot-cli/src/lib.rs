//! ot - OnlineTrack administration CLI
//!
//! Works directly on the OnlineTrack SQLite database: user profiles, modules,
//! tests, grades and dashboard overviews. Every command prints JSON.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod context;
pub(crate) mod error;
pub(crate) mod grade_commands;
pub mod logger;
pub(crate) mod module_commands;
pub(crate) mod overview_commands;
pub(crate) mod route_command;
pub(crate) mod test_commands;
pub(crate) mod user_commands;


pub use cli::Cli;
pub use commands::Commands;
pub use context::Context;
pub use error::{CliError, Result};
pub use grade_commands::GradeCommands;
pub use module_commands::ModuleCommands;
pub use overview_commands::OverviewCommands;
pub use test_commands::TestCommands;
pub use user_commands::UserCommands;
