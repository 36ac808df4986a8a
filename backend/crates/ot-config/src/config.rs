use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, LoggingConfig, ResolverConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub resolver: ResolverConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for OT_CONFIG_DIR env var, else use ./.onlinetrack/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply OT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: OT_CONFIG_DIR env var > ./.onlinetrack/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.database.validate()?;
        self.resolver.validate()?;
        self.validation.validate()?;
        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  resolver: password={}x{}ms, federated={}x{}ms, dashboard={}x{}ms",
            self.resolver.password_max_attempts,
            self.resolver.password_retry_delay_ms,
            self.resolver.federated_max_attempts,
            self.resolver.federated_retry_delay_ms,
            self.resolver.dashboard_max_attempts,
            self.resolver.dashboard_retry_delay_ms
        );
        info!(
            "  resolver backoff: {}x, max={}s, jitter={}",
            self.resolver.backoff_multiplier, self.resolver.max_delay_secs, self.resolver.jitter
        );
        info!(
            "  validation: password>={}, name<={}",
            self.validation.min_password_length, self.validation.max_name_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Database
        Self::apply_env_string("OT_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("OT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("OT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("OT_LOG_FILE", &mut self.logging.file);

        // Resolver
        Self::apply_env_parse(
            "OT_RESOLVER_PASSWORD_MAX_ATTEMPTS",
            &mut self.resolver.password_max_attempts,
        );
        Self::apply_env_parse(
            "OT_RESOLVER_PASSWORD_RETRY_DELAY_MS",
            &mut self.resolver.password_retry_delay_ms,
        );
        Self::apply_env_parse(
            "OT_RESOLVER_FEDERATED_MAX_ATTEMPTS",
            &mut self.resolver.federated_max_attempts,
        );
        Self::apply_env_parse(
            "OT_RESOLVER_FEDERATED_RETRY_DELAY_MS",
            &mut self.resolver.federated_retry_delay_ms,
        );
        Self::apply_env_parse(
            "OT_RESOLVER_DASHBOARD_MAX_ATTEMPTS",
            &mut self.resolver.dashboard_max_attempts,
        );
        Self::apply_env_parse(
            "OT_RESOLVER_DASHBOARD_RETRY_DELAY_MS",
            &mut self.resolver.dashboard_retry_delay_ms,
        );
        Self::apply_env_parse(
            "OT_RESOLVER_BACKOFF_MULTIPLIER",
            &mut self.resolver.backoff_multiplier,
        );
        Self::apply_env_parse(
            "OT_RESOLVER_MAX_DELAY_SECS",
            &mut self.resolver.max_delay_secs,
        );
        Self::apply_env_bool("OT_RESOLVER_JITTER", &mut self.resolver.jitter);

        // Validation
        Self::apply_env_parse(
            "OT_VALIDATION_MIN_PASSWORD_LENGTH",
            &mut self.validation.min_password_length,
        );
        Self::apply_env_parse(
            "OT_VALIDATION_MAX_NAME_LENGTH",
            &mut self.validation.max_name_length,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
