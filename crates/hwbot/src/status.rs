//! Turns a homework record into the chat notification text.

use hwbot_common::{HomeworkRecord, Result};
use hwbot_i18n::MessageCatalog;

/// Formats the status change message for one homework.
///
/// Fails with a schema error if `homework_name` or `status` is absent and
/// with an unknown verdict error if the status is not in the verdict table.
pub fn parse_status(catalog: &MessageCatalog, homework: &HomeworkRecord) -> Result<String> {
    let homework_name = homework.homework_name()?;
    let status = homework.status()?;
    catalog.status_changed(homework_name, status)
}
