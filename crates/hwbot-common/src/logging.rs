//! Structured logging infrastructure

use crate::error::{HwbotError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One line per event: timestamp, level, target, message
    #[default]
    Compact,
    /// Multi-line, human oriented output with colors
    Pretty,
    /// Newline-delimited JSON
    Json,
}

impl FromStr for LogFormat {
    type Err = HwbotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(HwbotError::configuration(format!(
                "unknown log format '{other}', expected compact, pretty or json"
            ))),
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "hwbot=trace")
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            include_targets: true,
        }
    }
}

impl LoggingConfig {
    /// Builds the filter: `RUST_LOG` wins, then the configured level, then `info`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Checks a level filter such as `debug` or `hwbot=trace,info`.
///
/// Bare directives must name a level; `target=level` directives go through
/// the `EnvFilter` parser.
pub fn validate_level_filter(directives: &str) -> Result<()> {
    for directive in directives.split(',').map(str::trim) {
        if directive.is_empty() || directive.contains('=') || directive.contains('[') {
            continue;
        }
        directive.parse::<LevelFilter>().map_err(|_| {
            HwbotError::configuration(format!(
                "unknown log level '{directive}', expected off, error, warn, info, debug or trace"
            ))
        })?;
    }

    EnvFilter::try_new(directives)
        .map(drop)
        .map_err(|e| HwbotError::configuration(format!("invalid log filter '{directives}': {e}")))
}

/// Initialize the global tracing subscriber.
///
/// Must run once, before the poll loop starts. A second call fails instead
/// of replacing the subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    let result = match config.format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(config.include_targets),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_target(config.include_targets))
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_target(config.include_targets),
            )
            .try_init(),
    };

    result.map_err(|e| HwbotError::configuration(format!("failed to initialize logging: {e}")))?;

    tracing::debug!(level = %config.level, format = ?config.format, "Logging initialized");
    Ok(())
}
