use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Screen-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Title shown in the header (default: "Expo Test App").
    #[serde(default = "default_title")]
    pub title: String,
    /// Redraw interval when no input arrives, in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// What happens when the counter runs past `i64::MAX` or `i64::MIN`.
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

/// Counter arithmetic at the ends of the `i64` range.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Stick at the boundary.
    #[default]
    Saturate,
    /// Two's-complement wrap to the opposite boundary.
    Wrap,
}

impl OverflowPolicy {
    /// Applies `delta` to `value`. The flag is true when the result was
    /// clamped or wrapped.
    pub fn apply(self, value: i64, delta: i64) -> (i64, bool) {
        match self {
            OverflowPolicy::Saturate => match value.checked_add(delta) {
                Some(next) => (next, false),
                None => (value.saturating_add(delta), true),
            },
            OverflowPolicy::Wrap => value.overflowing_add(delta),
        }
    }
}

/// File logging. The terminal is owned by the UI, so logs never go to stdout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    /// `tracing_subscriber::EnvFilter` directive (default: "info").
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file location. Defaults to `<data_dir>/counter-echo/counter-echo.log`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_title() -> String {
    "Expo Test App".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            counter: CounterConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturate_sticks_at_bounds() {
        let policy = OverflowPolicy::Saturate;
        assert_eq!(policy.apply(i64::MAX, 1), (i64::MAX, true));
        assert_eq!(policy.apply(i64::MIN, -1), (i64::MIN, true));
        assert_eq!(policy.apply(41, 1), (42, false));
    }

    #[test]
    fn wrap_crosses_to_opposite_bound() {
        let policy = OverflowPolicy::Wrap;
        assert_eq!(policy.apply(i64::MAX, 1), (i64::MIN, true));
        assert_eq!(policy.apply(i64::MIN, -1), (i64::MAX, true));
        assert_eq!(policy.apply(0, -1), (-1, false));
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn overflow_policy_parses_lowercase() {
        let config: Config = toml::from_str("[counter]\noverflow = \"wrap\"\n").unwrap();
        assert_eq!(config.counter.overflow, OverflowPolicy::Wrap);
    }
}
