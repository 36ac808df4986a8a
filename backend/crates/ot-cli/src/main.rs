//! ot - OnlineTrack administration CLI
//!
//! # Examples
//!
//! ```bash
//! # List all facilitators
//! ot user list --role facilitator --pretty
//!
//! # Disable an account
//! ot user set-status <uid> disabled
//!
//! # Where does this user land after sign-in?
//! ot route <uid>
//! ```

use ot_cli::{Cli, CliError, Context, logger};
use ot_config::Config;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command, cli.pretty).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: ot_cli::Commands, pretty: bool) -> Result<String, CliError> {
    // .env is optional; OT_* variables may also come from the shell
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let pool = ot_db::open_pool(&config.database_path()?).await?;
    let ctx = Context::from_config(pool, &config);

    let value: Value = command.execute(&ctx).await?;
    let json = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}
