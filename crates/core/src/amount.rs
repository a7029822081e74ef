//! Monetary amount coercion.
//!
//! The backend sends amounts as JSON numbers, numeric strings, `null`, or not at
//! all. Everything that is not a readable number becomes zero; only values that
//! were present but unreadable are logged. Magnitudes above [`MAX_AMOUNT`] are
//! treated as unreadable.

use core::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::Value;

/// Largest accepted magnitude (10^15). Sums over any realistic number of rows
/// stay far inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Coerce a loosely-typed JSON amount into a `Decimal` (zero when unreadable).
pub fn coerce_amount(value: &Value) -> Decimal {
    coerce_amount_field("amount", value)
}

/// Like [`coerce_amount`], naming the field in the warning emitted for malformed input.
pub fn coerce_amount_field(field: &str, value: &Value) -> Decimal {
    match try_amount(value) {
        Some(amount) => amount,
        None => {
            tracing::warn!(field, value = %value, "non-numeric amount, defaulting to 0");
            Decimal::ZERO
        }
    }
}

fn try_amount(value: &Value) -> Option<Decimal> {
    read_amount(value).filter(|amount| amount.abs() <= MAX_AMOUNT)
}

fn read_amount(value: &Value) -> Option<Decimal> {
    match value {
        Value::Null => Some(Decimal::ZERO),
        Value::Number(n) => {
            parse_decimal(&n.to_string()).or_else(|| n.as_f64().and_then(Decimal::from_f64))
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(Decimal::ZERO)
            } else {
                parse_decimal(trimmed)
            }
        }
        Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}
