//! Runtime configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first, if present.

use crate::output::OutputFormat;
use log::LevelFilter;
use std::error::Error;

pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_LOG_LEVEL: &str = "SUBNET_CALC_LOG_LEVEL";
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path of the log4rs YAML file.
    pub log_config: String,
    /// Level for the console logger used when `log_config` does not exist.
    pub log_level: LevelFilter,
    /// Output format when none is given on the command line.
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            log_level: LevelFilter::Info,
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Load `.env` and build the config from process environment variables.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, falling back to defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = path;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level
                .parse()
                .map_err(|_| format!("Invalid {ENV_LOG_LEVEL}: {level}"))?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format.parse()?;
        }
        Ok(config)
    }
}
