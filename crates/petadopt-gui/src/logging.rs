//! Logging set-up using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: settings could not be written
//! - `warn`: recoverable failures (backend rejections, unreadable settings)
//! - `info`: navigation, submissions, settings load/save
//! - `debug`: toggles, filter changes, validation outcomes
//!
//! # Environment
//!
//! `PETADOPT_LOG` takes precedence over `RUST_LOG`; both accept the usual
//! `EnvFilter` directives. `PETADOPT_LOG_FORMAT` selects `pretty`,
//! `compact` or `json` output.

use std::env;
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const FILTER_ENV: &str = "PETADOPT_LOG";
pub const FORMAT_ENV: &str = "PETADOPT_LOG_FORMAT";

/// Crates whose events follow the configured level.
const OWN_CRATES: &[&str] = &[
    "petadopt_core",
    "petadopt_gui",
    "petadopt_model",
    "petadopt_validate",
];

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_timestamps: bool,
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_timestamps: true,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Defaults, with the output format taken from `PETADOPT_LOG_FORMAT`.
    pub fn from_env() -> Self {
        let format = env::var(FORMAT_ENV)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        Self::default().with_format(format)
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    #[must_use]
    pub fn with_target(mut self, enable: bool) -> Self {
        self.with_target = enable;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    let filter = build_env_filter(config.level);

    match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(config.with_target),
            )
            .try_init(),
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .try_init()
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target);
            if config.with_timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .try_init()
            }
        }
    }
}

/// `PETADOPT_LOG`, else `RUST_LOG`, else `level` for our crates and
/// `warn` for everything else.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

fn default_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(OWN_CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" compact ".parse::<LogFormat>(), Ok(LogFormat::Compact));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_default_directives() {
        assert_eq!(
            default_directives(Level::DEBUG),
            "warn,petadopt_core=debug,petadopt_gui=debug,petadopt_model=debug,petadopt_validate=debug"
        );
    }

    #[test]
    fn test_builder() {
        let config = LogConfig::default()
            .with_level(Level::DEBUG)
            .with_format(LogFormat::Compact)
            .with_timestamps(false);
        assert_eq!(config.level, Level::DEBUG);
        assert_eq!(config.format, LogFormat::Compact);
        assert!(!config.with_timestamps);
    }
}
