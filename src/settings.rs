use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub pool_size: u32,
    pub run_migrations: bool,
    pub log_level: String,
}

impl Settings {
    /// Reads `SHAREIT_*` variables from the environment.
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("pool_size", 10)?
            .set_default("run_migrations", true)?
            .set_default("log_level", "info")?
            .add_source(Environment::with_prefix("SHAREIT").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn for_database(database_url: impl Into<String>) -> Self {
        Settings {
            database_url: database_url.into(),
            pool_size: 10,
            run_migrations: true,
            log_level: "info".to_string(),
        }
    }
}
