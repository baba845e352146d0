//! Output formatting utilities.

use docket_store::EventRecord;
use serde_json::{json, Value};

/// Renders stored bytes, re-indenting them when `pretty` and they parse as JSON.
pub fn format_payload(bytes: &[u8], pretty: bool) -> String {
    if pretty {
        if let Ok(value) = serde_json::from_slice::<Value>(bytes) {
            if let Ok(text) = serde_json::to_string_pretty(&value) {
                return text;
            }
        }
    }
    String::from_utf8_lossy(bytes).into_owned()
}

/// Formats an event as a single JSON line; non-JSON payloads become strings.
pub fn format_event_json(event: &EventRecord) -> String {
    let payload = event
        .payload_json()
        .unwrap_or_else(|| Value::String(String::from_utf8_lossy(&event.payload).into_owned()));
    json!({ "name": event.name, "payload": payload }).to_string()
}

/// Formats an event as a simple table row.
pub fn format_event_row(event: &EventRecord) -> String {
    let payload = event.payload_json();
    let field = |name: &str| {
        payload
            .as_ref()
            .and_then(|v| v.get(name))
            .and_then(|v| v.as_str())
            .unwrap_or("?")
            .to_string()
    };
    format!(
        "{:<12} {:<16} {}",
        truncate(&event.name, 12),
        field("type"),
        field("description")
    )
}

/// Prints the event table header.
#[allow(clippy::print_literal)]
pub fn print_event_header() {
    println!("{:<12} {:<16} {}", "NAME", "TYPE", "DESCRIPTION");
    println!("{}", "-".repeat(72));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
