use crate::error::{CliError, Result as CliErrorResult};
use crate::Context;

use ot_core::Module;
use ot_db::{ModuleRepository, UserRepository};

use chrono::Utc;
use clap::Subcommand;
use log::info;
use serde_json::{Value, json};

#[derive(Subcommand)]
pub enum ModuleCommands {
    /// Create a learning module
    Create {
        #[arg(long)]
        name: String,

        /// Short course code, e.g. CS101
        #[arg(long)]
        code: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "")]
        content: String,

        /// Author's user ID
        #[arg(long)]
        created_by: String,
    },

    /// List modules, newest first
    List {
        /// Only the N most recent modules
        #[arg(long)]
        recent: Option<u32>,
    },
}

impl ModuleCommands {
    pub async fn execute(self, ctx: &Context) -> CliErrorResult<Value> {
        let modules = ModuleRepository::new(ctx.pool.clone());

        match self {
            ModuleCommands::Create {
                name,
                code,
                description,
                content,
                created_by,
            } => {
                let author = UserRepository::new(ctx.pool.clone())
                    .find_by_uid(&created_by)
                    .await?
                    .ok_or_else(|| CliError::not_found("User", &created_by))?;

                let module =
                    Module::new(&name, &code, &description, &content, &author, Utc::now())?;
                modules.create(&module).await?;
                info!("Created module {} ({})", module.id, module.code);

                Ok(serde_json::to_value(module)?)
            }
            ModuleCommands::List { recent } => {
                let list = match recent {
                    Some(limit) => modules.list_recent(Some(limit)).await?,
                    None => modules.list_all().await?,
                };
                Ok(json!({ "modules": list }))
            }
        }
    }
}
