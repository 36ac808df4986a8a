use crate::error::{CliError, Result as CliErrorResult};
use crate::Context;

use ot_core::{AccountStatus, ProfileUpdate, Role};
use ot_db::UserRepository;

use std::str::FromStr;

use clap::Subcommand;
use log::info;
use serde_json::{Value, json};

#[derive(Subcommand)]
pub enum UserCommands {
    /// List user profiles, newest first
    List {
        /// Filter by role
        #[arg(long, value_parser = ["student", "facilitator", "admin"])]
        role: Option<String>,
    },

    /// Show a user profile
    Show {
        /// User ID (identity uid)
        uid: String,
    },

    /// Enable or disable an account
    SetStatus {
        /// User ID (identity uid)
        uid: String,

        /// New status
        #[arg(value_parser = ["active", "disabled"])]
        status: String,
    },

    /// Update profile fields
    Update {
        /// User ID (identity uid)
        uid: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long)]
        specialization: Option<String>,
    },
}

impl UserCommands {
    pub async fn execute(self, ctx: &Context) -> CliErrorResult<Value> {
        let users = UserRepository::new(ctx.pool.clone());

        match self {
            UserCommands::List { role } => {
                let profiles = match role {
                    Some(role) => users.list_by_role(Role::from_str(&role)?).await?,
                    None => users.list_all().await?,
                };
                Ok(json!({ "users": profiles }))
            }
            UserCommands::Show { uid } => {
                let profile = users
                    .find_by_uid(&uid)
                    .await?
                    .ok_or_else(|| CliError::not_found("User", &uid))?;
                Ok(serde_json::to_value(profile)?)
            }
            UserCommands::SetStatus { uid, status } => {
                let status = AccountStatus::from_str(&status)?;
                users.set_status(&uid, status).await?;
                info!("Set status of {} to {}", uid, status.as_str());

                let profile = users
                    .find_by_uid(&uid)
                    .await?
                    .ok_or_else(|| CliError::not_found("User", &uid))?;
                Ok(serde_json::to_value(profile)?)
            }
            UserCommands::Update {
                uid,
                name,
                phone,
                bio,
                department,
                specialization,
            } => {
                let update = ProfileUpdate {
                    name,
                    phone,
                    bio,
                    department,
                    specialization,
                    ..ProfileUpdate::default()
                }
                .normalized(ctx.validation.max_name_length)?;

                if update.is_empty() {
                    return Err(CliError::invalid_input("Nothing to update"));
                }

                let profile = users.update_profile(&uid, &update).await?;
                info!("Updated profile {}", uid);
                Ok(serde_json::to_value(profile)?)
            }
        }
    }
}
