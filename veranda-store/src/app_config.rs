use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub pricing: PricingSourceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PricingSourceConfig {
    /// Path to a pricing-table file. When unset, the built-in standard
    /// tables are used.
    pub tables_path: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of VERANDA)
            // Eg.. `VERANDA_DEBUG=1` would set the `debug` key
            .add_source(config::Environment::with_prefix("VERANDA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
