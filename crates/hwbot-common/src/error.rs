//! Error types for the homework bot.
//!
//! Every failure a poll cycle can hit is one of these variants. Only
//! [`HwbotError::Configuration`] is fatal; the poll loop logs everything
//! else and waits for the next cycle.

use thiserror::Error;

/// Result type alias for homework bot operations
pub type Result<T> = std::result::Result<T, HwbotError>;

/// Boxed error source carried by several variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for homework bot operations
#[derive(Error, Debug)]
pub enum HwbotError {
    /// A required setting is missing or invalid
    #[error("Configuration error: {message}")]
    Configuration {
        /// Human readable description
        message: String,
        /// Environment variable involved, if any
        variable: Option<String>,
    },

    /// The request never produced an HTTP response (connect, DNS, timeout)
    #[error("Transport error: {message}")]
    Transport {
        /// Human readable description
        message: String,
        /// Underlying client error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The API answered with a status other than 200
    #[error("Unexpected status: API returned HTTP {status}")]
    UnexpectedStatus {
        /// Numeric HTTP status code
        status: u16,
    },

    /// The API answered 200 but the body is not JSON
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// Human readable description
        message: String,
        /// Parser error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The payload does not have the expected shape
    #[error("Schema error: {message}")]
    Schema {
        /// Human readable description
        message: String,
        /// Offending field, if the error is about one field
        field: Option<String>,
    },

    /// A homework carries a status the verdict table does not know
    #[error("Unknown verdict: homework status '{status}' is not recognized")]
    UnknownVerdict {
        /// The unrecognized status code
        status: String,
    },

    /// The chat message could not be delivered
    #[error("Delivery error: {message}")]
    Delivery {
        /// Human readable description
        message: String,
        /// Underlying bot client error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A message template could not be loaded or rendered
    #[error("Localization error: {message}")]
    Localization {
        /// Human readable description
        message: String,
        /// Message id involved, if any
        key: Option<String>,
    },
}

impl HwbotError {
    /// Create a new configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration {
            message: msg.into(),
            variable: None,
        }
    }

    /// Create a configuration error about a specific environment variable
    pub fn configuration_variable(msg: impl Into<String>, variable: impl Into<String>) -> Self {
        Self::Configuration {
            message: msg.into(),
            variable: Some(variable.into()),
        }
    }

    /// Create a new transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new transport error with source
    pub fn transport_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unexpected status error
    pub const fn unexpected_status(status: u16) -> Self {
        Self::UnexpectedStatus { status }
    }

    /// Create a malformed response error with source
    pub fn malformed_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::MalformedResponse {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a schema error about a missing field
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::Schema {
            message: format!("missing field '{field}'"),
            field: Some(field),
        }
    }

    /// Create a schema error about a field of the wrong type
    pub fn field_type(field: impl Into<String>, expected: &str, found: &str) -> Self {
        let field = field.into();
        Self::Schema {
            message: format!("field '{field}' must be {expected}, found {found}"),
            field: Some(field),
        }
    }

    /// Create an unknown verdict error
    pub fn unknown_verdict(status: impl Into<String>) -> Self {
        Self::UnknownVerdict {
            status: status.into(),
        }
    }

    /// Create a new delivery error
    pub fn delivery(msg: impl Into<String>) -> Self {
        Self::Delivery {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new delivery error with source
    pub fn delivery_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Delivery {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error
    pub fn localization(msg: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            key: None,
        }
    }

    /// Create a localization error for a specific message id
    pub fn localization_key(msg: impl Into<String>, key: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            key: Some(key.into()),
        }
    }

    /// Stable snake_case name of the error kind, used as a structured log field
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "configuration",
            Self::Transport { .. } => "transport",
            Self::UnexpectedStatus { .. } => "unexpected_status",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::Schema { .. } => "schema",
            Self::UnknownVerdict { .. } => "unknown_verdict",
            Self::Delivery { .. } => "delivery",
            Self::Localization { .. } => "localization",
        }
    }

    /// Whether this error must stop the process before polling starts
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// The error followed by its `source` chain, joined with `: `.
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            report.push_str(": ");
            report.push_str(&cause.to_string());
            source = cause.source();
        }
        report
    }

    /// Field named by a schema error
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Schema { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

/// Convert from serde_json::Error to HwbotError
impl From<serde_json::Error> for HwbotError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed_with_source("response body is not valid JSON", err)
    }
}
