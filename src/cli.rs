use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError, OverflowPolicy};

/// Counter and text echo in the terminal.
#[derive(Debug, Parser)]
#[command(name = "counter-echo", version, about)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the screen title
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Counter behavior at the ends of the i64 range
    #[arg(long, value_enum, value_name = "POLICY")]
    pub overflow: Option<OverflowPolicy>,

    /// Enable file logging at this level (e.g. "debug")
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Load and validate the config, print it, then exit
    #[arg(long)]
    pub check_config: bool,
}

impl Cli {
    /// Loads the config named by `--config`, or the default one, then
    /// applies flag overrides and validates the result.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(title) = &self.title {
            config.app.title = title.clone();
        }
        if let Some(overflow) = self.overflow {
            config.counter.overflow = overflow;
        }
        if let Some(level) = &self.log_level {
            config.logging.enabled = true;
            config.logging.level = level.clone();
        }
    }
}
