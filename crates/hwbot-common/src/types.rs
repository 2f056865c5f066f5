//! Common type definitions and newtype wrappers for domain modeling.

use crate::error::{HwbotError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Unix timestamp in seconds, the `from_date` lower bound of a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FromDate(pub i64);

impl fmt::Display for FromDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Destination chat for notifications.
///
/// Numeric identifiers address a chat directly; anything else is treated
/// as a public channel username such as `@homework_updates`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChatTarget {
    /// Numeric chat id.
    Id(i64),
    /// Channel username.
    Username(String),
}

impl ChatTarget {
    /// Parses a raw chat identifier as read from the environment.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        raw.parse::<i64>()
            .map_or_else(|_| Self::Username(raw.to_string()), Self::Id)
    }
}

impl fmt::Display for ChatTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Username(name) => f.write_str(name),
        }
    }
}

/// Review status of a homework, the key of the verdict table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeworkStatus {
    /// The reviewer accepted the work.
    Approved,
    /// The work is being reviewed.
    Reviewing,
    /// The reviewer returned the work with remarks.
    Rejected,
}

impl HomeworkStatus {
    /// All statuses the verdict table knows.
    pub const ALL: [Self; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Wire representation used by the API.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = HwbotError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(HwbotError::unknown_verdict(other)),
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of the `homeworks` array.
///
/// Holds the raw JSON value exactly as received. Shape is checked lazily by
/// the accessors, so validation of the list never rejects a record on its
/// own; the record fails only when a field is actually read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HomeworkRecord(Value);

impl HomeworkRecord {
    /// Name of the homework.
    pub fn homework_name(&self) -> Result<&str> {
        self.string_field("homework_name")
    }

    /// Raw status code as sent by the API.
    pub fn status_code(&self) -> Result<&str> {
        self.string_field("status")
    }

    /// Status parsed against the verdict table.
    pub fn status(&self) -> Result<HomeworkStatus> {
        self.status_code()?.parse()
    }

    /// The record as a JSON object.
    pub fn fields(&self) -> Result<&Map<String, Value>> {
        self.0.as_object().ok_or_else(|| {
            HwbotError::schema(format!(
                "homework record must be an object, found {}",
                json_type_name(&self.0)
            ))
        })
    }

    /// The raw JSON value.
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    fn string_field(&self, field: &str) -> Result<&str> {
        match self.fields()?.get(field) {
            None | Some(Value::Null) => Err(HwbotError::missing_field(field)),
            Some(Value::String(value)) => Ok(value),
            Some(other) => Err(HwbotError::field_type(field, "a string", json_type_name(other))),
        }
    }
}

impl From<Value> for HomeworkRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Describes the JSON type of a value with an article, for error messages.
pub const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
