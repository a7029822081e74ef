//! Field lookup over loosely-shaped backend rows.
//!
//! Different endpoints name the same concept differently (`phone` vs `phone2`,
//! `debit` vs `master_debit`), so lookups take a list of candidate keys.

use serde_json::Value;

static NULL: Value = Value::Null;

/// First candidate field that is present and not `null`, else `Value::Null`.
pub fn first_present<'a>(row: &'a Value, keys: &[&str]) -> &'a Value {
    keys.iter()
        .filter_map(|key| row.get(*key))
        .find(|value| !value.is_null())
        .unwrap_or(&NULL)
}

/// First candidate field rendered as text (strings as-is, numbers formatted).
pub fn text_field(row: &Value, keys: &[&str]) -> Option<String> {
    match first_present(row, keys) {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
