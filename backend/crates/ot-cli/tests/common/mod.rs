#![allow(dead_code)]

use ot_cli::{Cli, CliError, Context};
use ot_config::{ResolverConfig, ValidationConfig};
use ot_core::{ProfileRecord, Role};
use ot_db::UserRepository;

use chrono::{TimeZone, Utc};
use clap::Parser;
use serde_json::Value;
use sqlx::SqlitePool;

/// In-memory database plus a context whose dashboard retries do not wait.
pub async fn create_test_context() -> (Context, SqlitePool) {
    let pool = ot_db::open_in_memory()
        .await
        .expect("Failed to create test pool");

    let resolver = ResolverConfig {
        dashboard_max_attempts: 2,
        dashboard_retry_delay_ms: 0,
        ..ResolverConfig::default()
    };

    (
        Context::new(pool.clone(), resolver, ValidationConfig::default()),
        pool,
    )
}

pub async fn seed_user(pool: &SqlitePool, uid: &str, role: Role) -> ProfileRecord {
    let profile = ProfileRecord::new(
        uid,
        format!("Test {}", uid),
        format!("{}@example.com", uid),
        role,
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
    );
    UserRepository::new(pool.clone())
        .create(&profile)
        .await
        .expect("Failed to seed user");
    profile
}

/// Parse `args` as a command line and run it.
pub async fn run(ctx: &Context, args: &[&str]) -> Result<Value, CliError> {
    let cli = Cli::try_parse_from(std::iter::once("ot").chain(args.iter().copied()))
        .expect("Invalid command line");
    cli.command.execute(ctx).await
}

pub const QUESTIONS_JSON: &str = r#"[
    {"text": "2 + 2 = ?", "type": "multiple_choice",
     "options": ["3", "4"], "correct_answer": "4", "points": 5},
    {"text": "The borrow checker runs at compile time", "type": "true_false",
     "correct_answer": "true", "points": 5}
]"#;
