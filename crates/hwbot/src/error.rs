//! Application-wide error types using thiserror.

use hwbot_common::HwbotError;
use hwbot_config::ConfigError;

/// Errors that stop the bot before polling begins.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A component could not be built from a valid configuration.
    #[error("Startup error: {0}")]
    Startup(#[from] HwbotError),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;
