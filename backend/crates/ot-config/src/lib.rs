mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod resolver_config;
mod validation_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use resolver_config::ResolverConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "OT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".onlinetrack";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "onlinetrack.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
