//! Test utilities and shared test helpers.
//!
//! This module provides fixtures and helper functions used by unit and
//! integration tests across the workspace.

use std::collections::HashMap;
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// API payload fixtures.
pub mod api_fixtures {
    use serde_json::{json, Value};

    /// A payload with no homework updates.
    pub fn empty_payload() -> Value {
        json!({ "homeworks": [], "current_date": 1_704_110_400 })
    }

    /// A single homework object.
    pub fn homework(name: &str, status: &str) -> Value {
        json!({
            "id": 124,
            "status": status,
            "homework_name": name,
            "reviewer_comment": "",
            "date_updated": "2024-01-01T12:00:00Z",
            "lesson_name": "Final project"
        })
    }

    /// A payload containing the given homework objects.
    pub fn payload_with(homeworks: Vec<Value>) -> Value {
        json!({ "homeworks": homeworks, "current_date": 1_704_110_400 })
    }
}

/// Environment fixtures for configuration tests.
pub mod env_fixtures {
    use super::HashMap;

    /// A complete set of required variables.
    pub fn required_vars() -> HashMap<String, String> {
        HashMap::from([
            ("PRACTICUM_TOKEN".to_string(), "y0_test_practicum_token".to_string()),
            (
                "TELEGRAM_TOKEN".to_string(),
                "123456:test-telegram-token".to_string(),
            ),
            ("TELEGRAM_CHAT_ID".to_string(), "123456789".to_string()),
        ])
    }

    /// Builds a lookup closure over a map, the shape the config loader expects.
    pub fn lookup(vars: HashMap<String, String>) -> impl Fn(&str) -> Option<String> {
        move |key| vars.get(key).cloned()
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for status codes the verdict table does not know.
    pub fn unknown_status_strategy() -> impl Strategy<Value = String> {
        r"[a-z_]{1,16}".prop_filter("must not be a known status", |s| {
            !matches!(s.as_str(), "approved" | "reviewing" | "rejected")
        })
    }

    /// Strategy for homework names.
    pub fn homework_name_strategy() -> impl Strategy<Value = String> {
        r"[A-Za-z0-9_ .\-]{1,40}"
    }

    /// Strategy for HTTP status codes other than 200.
    pub fn non_ok_status_strategy() -> impl Strategy<Value = u16> {
        (100u16..=599).prop_filter("must not be 200", |code| *code != 200)
    }
}
