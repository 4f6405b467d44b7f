//! en-US display formatting for money, counts, and timestamps.
//!
//! Timestamps arrive as ISO-8601 local date-times (`2024-03-01T10:15:30`,
//! optional fractional seconds, occasionally with an offset) or plain dates.
//! Unparseable input is echoed back unchanged rather than hidden.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Insert thousands separators into a string of ASCII digits.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1234.5` -> `$1,234.50`, `-3` -> `-$3.00`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn currency(value: f64) -> String {
    if !value.is_finite() {
        return "$0.00".to_owned();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", group_digits(&(cents / 100).to_string()), cents % 100)
}

/// `12345` -> `12,345`.
#[must_use]
pub fn number(value: i64) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string());
    if value < 0 { format!("-{grouped}") } else { grouped }
}

/// Signed stock delta with an explicit `+` for additions.
#[must_use]
pub fn signed_number(value: i64) -> String {
    if value > 0 { format!("+{}", number(value)) } else { number(value) }
}

fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
        .or_else(|| parse_date(raw).and_then(|d| d.and_hms_opt(0, 0, 0)))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// `2024-03-01` or `2024-03-01T10:15:30` -> `Mar 1, 2024`.
#[must_use]
pub fn date(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.to_owned(), |d| d.format("%b %-d, %Y").to_string())
}

/// `2024-03-01T14:15:30` -> `Mar 1, 02:15 PM`.
#[must_use]
pub fn date_time(raw: &str) -> String {
    parse_date_time(raw).map_or_else(|| raw.to_owned(), |dt| dt.format("%b %-d, %I:%M %p").to_string())
}

/// Optional timestamp with an em-width placeholder for missing values.
#[must_use]
pub fn date_or_dash(raw: Option<&str>) -> String {
    raw.filter(|r| !r.trim().is_empty()).map_or_else(|| "\u{2014}".to_owned(), date)
}

#[must_use]
pub fn date_time_or_dash(raw: Option<&str>) -> String {
    raw.filter(|r| !r.trim().is_empty()).map_or_else(|| "\u{2014}".to_owned(), date_time)
}
