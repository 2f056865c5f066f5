//! Configuration loading from the environment.

use crate::schema::Config;
use hwbot_common::{validate_level_filter, HwbotError, LogFormat};
use std::env;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, error};

/// Practicum OAuth token (required).
pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
/// Telegram bot token (required).
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
/// Destination chat id (required).
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
/// Override for the homework statuses endpoint.
pub const PRACTICUM_ENDPOINT: &str = "PRACTICUM_ENDPOINT";
/// Override for the pause between cycles, in seconds.
pub const RETRY_PERIOD_SECS: &str = "HWBOT_RETRY_PERIOD_SECS";
/// Override for the request timeout, in seconds.
pub const REQUEST_TIMEOUT_SECS: &str = "HWBOT_REQUEST_TIMEOUT_SECS";
/// Override for the log level filter.
pub const LOG_LEVEL: &str = "HWBOT_LOG_LEVEL";
/// Override for the log output format.
pub const LOG_FORMAT: &str = "HWBOT_LOG_FORMAT";

/// Variables that must be present and non-empty, in the order they are checked.
pub const REQUIRED_VARS: [&str; 3] = [PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("Missing required environment variable: {0}")]
    MissingVariable(String),

    /// An optional variable is set but cannot be parsed
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name
        var: String,
        /// Parse error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A value parsed but violates a constraint
    #[error("Invalid configuration for '{field}': {message}")]
    Invalid {
        /// Offending setting
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// A `.env` file exists but cannot be read
    #[error("Failed to read .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
}

impl ConfigError {
    /// Create an invalid value error
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Environment variable this error is about, if any
    pub fn variable(&self) -> Option<&str> {
        match self {
            Self::MissingVariable(var) | Self::EnvParse { var, .. } => Some(var),
            Self::Invalid { field, .. } => Some(field),
            Self::Dotenv(_) => None,
        }
    }
}

impl From<ConfigError> for HwbotError {
    fn from(err: ConfigError) -> Self {
        match err.variable() {
            Some(var) => {
                let var = var.to_string();
                Self::configuration_variable(err.to_string(), var)
            }
            None => Self::configuration(err.to_string()),
        }
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from `.env` (if present) and the process environment.
    pub fn load() -> Result<Config, ConfigError> {
        Self::load_dotenv()?;
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        config.practicum.token = Self::required(&lookup, PRACTICUM_TOKEN)?;
        config.telegram.token = Self::required(&lookup, TELEGRAM_TOKEN)?;
        config.telegram.chat_id = Self::required(&lookup, TELEGRAM_CHAT_ID)?;

        Self::apply_env_overrides(&mut config, &lookup)?;

        config.validate()?;
        Ok(config)
    }

    fn load_dotenv() -> Result<(), ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "Loaded environment from .env file");
                Ok(())
            }
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn required<F>(lookup: &F, var: &str) -> Result<String, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match Self::optional(lookup, var) {
            Some(value) => Ok(value),
            None => {
                error!(variable = var, "Required environment variable is missing");
                Err(ConfigError::MissingVariable(var.to_string()))
            }
        }
    }

    /// Trimmed value of a variable; empty counts as unset.
    fn optional<F>(lookup: &F, var: &str) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(var)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn parse_var<F, T>(lookup: &F, var: &str) -> Result<Option<T>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        Self::optional(lookup, var)
            .map(|value| {
                value.parse::<T>().map_err(|e| ConfigError::EnvParse {
                    var: var.to_string(),
                    source: Box::new(e),
                })
            })
            .transpose()
    }

    /// Apply optional environment variable overrides to configuration
    fn apply_env_overrides<F>(config: &mut Config, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = Self::optional(lookup, PRACTICUM_ENDPOINT) {
            config.practicum.endpoint = endpoint;
        }

        if let Some(secs) = Self::parse_var::<_, u64>(lookup, RETRY_PERIOD_SECS)? {
            config.polling.retry_period_secs = secs;
        }

        if let Some(secs) = Self::parse_var::<_, u64>(lookup, REQUEST_TIMEOUT_SECS)? {
            config.practicum.request_timeout_secs = secs;
        }

        if let Some(level) = Self::optional(lookup, LOG_LEVEL) {
            validate_level_filter(&level).map_err(|e| ConfigError::EnvParse {
                var: LOG_LEVEL.to_string(),
                source: Box::new(e),
            })?;
            config.logging.level = level;
        }

        if let Some(format) = Self::optional(lookup, LOG_FORMAT) {
            config.logging.format = format
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::EnvParse {
                    var: LOG_FORMAT.to_string(),
                    source: Box::new(e),
                })?;
        }

        Ok(())
    }
}
