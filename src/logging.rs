//! File-backed tracing setup.
//!
//! The TUI draws on stdout, so log output goes to a file and only when
//! enabled in config or via `--log-level`.

use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

const LOG_FILE_NAME: &str = "counter-echo.log";

/// Default log location: `<data_local_dir>/counter-echo/counter-echo.log`,
/// or the temp dir when there is no data dir.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("counter-echo")
        .join(LOG_FILE_NAME)
}

/// Installs the global subscriber. Returns the log file path, or `None`
/// when logging is disabled.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = config.file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory '{}'", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file '{}'", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("invalid log level '{}'", config.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .try_init()
        .map_err(|err| anyhow::anyhow!("installing tracing subscriber: {err}"))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_logging_installs_nothing() {
        let config = LoggingConfig::default();
        assert!(init_tracing(&config).unwrap().is_none());
    }

    #[test]
    fn default_log_path_ends_with_file_name() {
        assert!(default_log_path().ends_with("counter-echo/counter-echo.log"));
    }
}
