//! Entry date parsing (day resolution, timezone-naive).

use chrono::NaiveDate;

/// Parse a backend `entry_date`.
///
/// Accepts `YYYY-MM-DD`, optionally followed by `T` or a space and a time part
/// which is ignored. Returns `None` for anything else.
pub fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let day = trimmed
        .split(['T', ' '])
        .next()
        .unwrap_or(trimmed);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}
