//! # Homework Bot Common
//!
//! Shared types, errors, logging, and utilities for the homework status bot.
//!
//! This crate provides the foundational types used across all other crates
//! in the workspace: the error taxonomy every poll cycle reports through,
//! the homework record and status types, and the process-wide logging setup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{HwbotError, Result};
pub use logging::{init_logging, validate_level_filter, LogFormat, LoggingConfig};
pub use types::*;
pub use utils::*;
