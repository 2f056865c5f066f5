//! # Homework Bot I18n
//!
//! Fluent message catalog for the texts the bot sends to the chat.
//!
//! The catalog is embedded in the binary, parsed once on first use, and
//! read-only afterwards.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod loader;
pub mod messages;

pub use loader::*;
pub use messages::*;
