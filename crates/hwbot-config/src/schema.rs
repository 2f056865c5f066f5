//! Configuration schema definitions.

use hwbot_common::{ChatTarget, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Practicum API configuration.
    pub practicum: PracticumConfig,
    /// Telegram configuration.
    pub telegram: TelegramConfig,
    /// Polling configuration.
    pub polling: PollingConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Practicum homework API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticumConfig {
    /// OAuth token sent in the `Authorization` header.
    pub token: String,
    /// Homework statuses endpoint.
    pub endpoint: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

/// Telegram bot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Bot API token.
    pub token: String,
    /// Chat that receives status updates.
    pub chat_id: String,
}

/// Polling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Pause between the end of one cycle and the start of the next, in seconds.
    pub retry_period_secs: u64,
}

impl Config {
    /// Pause between poll cycles.
    pub const fn retry_period(&self) -> Duration {
        Duration::from_secs(self.polling.retry_period_secs)
    }

    /// Timeout applied to each API request.
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.practicum.request_timeout_secs)
    }

    /// Parsed notification destination.
    pub fn chat_target(&self) -> ChatTarget {
        ChatTarget::parse(&self.telegram.chat_id)
    }
}
