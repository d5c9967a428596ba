use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Mongo,
    /// Not durable; state is lost on restart.
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    pub url: String,
    pub name: String,
    pub seed_sample_data: bool,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Self::with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(File::with_name("config/local").required(false))
            // Eg.. `RENTAL__SERVER__PORT=9000`
            .add_source(
                Environment::with_prefix("RENTAL")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", env::var("MONGO_URL").ok())?
            .build()?;

        s.try_deserialize()
    }

    /// Builder preloaded with the built-in defaults and no other sources.
    pub fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8001)?
            .set_default("database.backend", "mongo")?
            .set_default("database.url", "mongodb://localhost:27017")?
            .set_default("database.name", "rental_marketplace")?
            .set_default("database.seed_sample_data", true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = Config::with_defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8001);
        assert_eq!(config.database.backend, StoreBackend::Mongo);
        assert_eq!(config.database.url, "mongodb://localhost:27017");
        assert_eq!(config.database.name, "rental_marketplace");
        assert!(config.database.seed_sample_data);
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let config: Config = Config::with_defaults()
            .unwrap()
            .set_override("database.backend", "memory")
            .unwrap()
            .set_override("server.port", 9000)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.database.backend, StoreBackend::Memory);
        assert_eq!(config.server.port, 9000);
    }
}
