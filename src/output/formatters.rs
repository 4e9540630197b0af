//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Local};
use serde_json::Value;

/// Format an API timestamp (RFC 3339) as local `YYYY-MM-DD HH:MM`.
///
/// Returns "N/A" when absent, and the raw text when it does not parse.
pub fn format_modified_at(timestamp: Option<&str>) -> String {
    match timestamp {
        None | Some("") => "N/A".to_string(),
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(instant) => instant
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            Err(_) => raw.to_string(),
        },
    }
}

/// String view of a field in an untyped API record, "-" when missing
pub fn field(record: &Value, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Shorten long text for table cells
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}
