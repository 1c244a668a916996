//! Helper functions and utilities
//!
//! Text helpers shared by the renderers and exporters.

use chrono::{DateTime, NaiveDate};

/// Placeholder for absent values in tables and cards
pub const NOT_PROVIDED: &str = "Not provided";

/// Truncate text to a maximum number of characters with an ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Escape text for interpolation into HTML content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escaped value or the "Not provided" placeholder
pub fn format_value(value: Option<&str>) -> String {
    match value {
        Some(v) => escape_html(v),
        None => NOT_PROVIDED.to_string(),
    }
}

/// Format a server date the way the dashboard shows it (`M/D/YYYY`).
///
/// Accepts the HTTP date format the server emits, RFC 3339 and `YYYY-MM-DD`.
/// Anything else is returned unchanged.
pub fn format_event_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc2822(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%a, %d %b %Y %H:%M:%S GMT"));

    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Percent-encode a stored file name for use as a single URL path segment
pub fn encode_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
