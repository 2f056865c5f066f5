//! Typed accessors for catalog messages.

use crate::loader::MessageCatalog;
use fluent_bundle::FluentArgs;
use hwbot_common::{HomeworkStatus, Result};

/// Message id of the status change notification.
pub const STATUS_CHANGED: &str = "status-changed";

/// Message id of the verdict text for a status.
pub const fn verdict_id(status: HomeworkStatus) -> &'static str {
    match status {
        HomeworkStatus::Approved => "verdict-approved",
        HomeworkStatus::Reviewing => "verdict-reviewing",
        HomeworkStatus::Rejected => "verdict-rejected",
    }
}

impl MessageCatalog {
    /// Human-readable verdict for a review status.
    pub fn verdict(&self, status: HomeworkStatus) -> Result<String> {
        self.format(verdict_id(status), None)
    }

    /// Notification text announcing a new review status of a homework.
    pub fn status_changed(&self, homework_name: &str, status: HomeworkStatus) -> Result<String> {
        let verdict = self.verdict(status)?;

        let mut args = FluentArgs::new();
        args.set("homework_name", homework_name);
        args.set("verdict", verdict);

        self.format(STATUS_CHANGED, Some(&args))
    }
}
