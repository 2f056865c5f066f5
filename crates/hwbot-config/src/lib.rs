//! # Homework Bot Config
//!
//! Type-safe configuration management for the homework status bot.
//!
//! Configuration comes from the process environment (optionally seeded from
//! a `.env` file). Three credentials are mandatory; everything else has a
//! default.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
