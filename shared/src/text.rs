//! Display helpers: truncation, plain-text excerpts, dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Keep the first `limit` characters, appending `...` when something was cut.
pub fn truncate_chars(value: &str, limit: usize) -> String {
    match value.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &value[..cut]),
        None => value.to_string(),
    }
}

/// Drop tags and decode the handful of entities editors emit.
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            },
            _ if !in_tag => out.push(ch),
            _ => {},
        }
    }
    let decoded = out
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `html` has no visible text.
pub fn is_blank_html(html: &str) -> bool {
    strip_html(html).trim().is_empty()
}

/// Plain-text preview of rich content.
pub fn excerpt(html: &str, limit: usize) -> String {
    truncate_chars(&strip_html(html), limit)
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// `January 5, 2025`; unparsable input is returned as-is.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|ts| ts.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `January 5, 2025 at 09:30 AM` (UTC).
pub fn format_date_time(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|ts| ts.format("%B %-d, %Y at %I:%M %p").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Upper-cased first letter for avatar bubbles.
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
        assert_eq!(truncate_chars("hello world", 5), "hello...");
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w...");
    }

    #[test]
    fn strips_markup_and_entities() {
        assert_eq!(strip_html("<p>Hi&nbsp;<b>there</b></p><p>x &amp; y</p>"), "Hi there x & y");
        assert!(is_blank_html("<p><br></p>"));
        assert!(is_blank_html("  "));
        assert!(!is_blank_html("<p>a</p>"));
    }

    #[test]
    fn excerpt_counts_visible_text_only() {
        assert_eq!(excerpt("<p>abcdef</p>", 3), "abc...");
    }

    #[test]
    fn formats_api_timestamps() {
        assert_eq!(format_date("2025-01-05T09:30:00.000Z"), "January 5, 2025");
        assert_eq!(format_date_time("2025-01-05T21:07:00Z"), "January 5, 2025 at 09:07 PM");
        assert_eq!(format_date("2024-12-31"), "December 31, 2024");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn initial_is_uppercased() {
        assert_eq!(initial(" alice"), "A");
        assert_eq!(initial(""), "");
    }
}
