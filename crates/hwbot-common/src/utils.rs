//! Shared utility functions.

use crate::types::FromDate;
use chrono::{DateTime, TimeZone, Utc};

/// Current wall-clock time as a poll lower bound.
pub fn now_from_date() -> FromDate {
    FromDate(Utc::now().timestamp())
}

/// Formats a Unix timestamp for log output.
pub fn format_timestamp(from_date: FromDate) -> String {
    Utc.timestamp_opt(from_date.0, 0)
        .single()
        .map_or_else(|| from_date.0.to_string(), |ts: DateTime<Utc>| {
            ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
        })
}

/// Masks a secret for log output, keeping at most the last four characters.
pub fn redact(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{tail}", "*".repeat(chars.len() - 4))
}

/// Truncates a string to a maximum number of characters with ellipsis.
pub fn truncate_string(input: &str, max_length: usize) -> String {
    if input.chars().count() <= max_length {
        input.to_string()
    } else {
        let kept: String = input.chars().take(max_length.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(FromDate(1_704_110_400)), "2024-01-01 12:00:00 UTC");
    }

    #[test]
    fn test_now_is_recent() {
        assert!(now_from_date().0 > 1_700_000_000);
    }

    #[test]
    fn test_redact() {
        assert_eq!(redact(""), "");
        assert_eq!(redact("short"), "*****");
        assert_eq!(redact("y0_AgAAAABCDEF1234"), "**************1234");
    }

    #[test]
    fn test_truncate_string() {
        let input = "This is a very long string that should be truncated";
        assert_eq!(truncate_string(input, 20), "This is a very lo...");
        assert_eq!(truncate_string("Short", 20), "Short");
        assert_eq!(truncate_string("Изменился статус", 9), "Измени...");
    }
}
