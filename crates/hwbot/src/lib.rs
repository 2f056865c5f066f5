//! # Homework Bot
//!
//! Polls the Practicum homework statuses API and forwards review verdicts
//! to a Telegram chat.
//!
//! Each poll cycle fetches the homeworks updated since the cycle started,
//! checks the payload shape, formats the latest change, and sends it. Any
//! failure is logged and the loop carries on after the retry period.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod bot;
pub mod error;
pub mod notifier;
pub mod poller;
pub mod response;
pub mod status;

pub use api::*;
pub use bot::*;
pub use error::*;
pub use notifier::*;
pub use poller::*;
pub use response::*;
pub use status::*;
