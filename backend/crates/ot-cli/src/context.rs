use ot_config::{Config, ResolverConfig, ValidationConfig};

use sqlx::SqlitePool;

/// What every command runs against.
pub struct Context {
    pub(crate) pool: SqlitePool,
    pub(crate) resolver: ResolverConfig,
    pub(crate) validation: ValidationConfig,
}

impl Context {
    pub fn new(pool: SqlitePool, resolver: ResolverConfig, validation: ValidationConfig) -> Self {
        Self {
            pool,
            resolver,
            validation,
        }
    }

    pub fn from_config(pool: SqlitePool, config: &Config) -> Self {
        Self::new(pool, config.resolver.clone(), config.validation.clone())
    }
}
