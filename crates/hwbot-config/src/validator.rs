//! Runtime validation of a loaded configuration.

use crate::loader::ConfigError;
use crate::schema::Config;
use url::Url;

impl Config {
    /// Validates the configuration.
    ///
    /// Credentials must be non-empty, durations positive, and the endpoint an
    /// absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let credentials = [
            ("practicum.token", &self.practicum.token),
            ("telegram.token", &self.telegram.token),
            ("telegram.chat_id", &self.telegram.chat_id),
        ];
        for (field, value) in credentials {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(field, "cannot be empty"));
            }
        }

        if self.polling.retry_period_secs == 0 {
            return Err(ConfigError::invalid(
                "polling.retry_period_secs",
                "must be greater than 0",
            ));
        }

        if self.practicum.request_timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "practicum.request_timeout_secs",
                "must be greater than 0",
            ));
        }

        let endpoint = Url::parse(&self.practicum.endpoint)
            .map_err(|e| ConfigError::invalid("practicum.endpoint", e.to_string()))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                "practicum.endpoint",
                format!("unsupported scheme '{}'", endpoint.scheme()),
            ));
        }

        Ok(())
    }
}
