//! log4rs initialisation.
//!
//! Uses the YAML file named in [`Config::log_config`] when it exists, and a
//! stderr console appender otherwise so stdout only carries results.

use crate::config::Config;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

pub fn init(config: &Config) -> Result<(), Box<dyn Error>> {
    if Path::new(&config.log_config).exists() {
        log4rs::init_file(&config.log_config, Default::default())?;
        log::debug!("Logging configured from {}", config.log_config);
    } else {
        log4rs::init_config(console_config(config)?)?;
        log::debug!(
            "No {} found, logging to stderr at {}",
            config.log_config,
            config.log_level
        );
    }
    Ok(())
}

fn console_config(config: &Config) -> Result<log4rs::Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let log_config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(config.log_level))?;
    Ok(log_config)
}
