//! Response envelope decoding.
//!
//! Endpoints answer with a bare array, `{ success, data: [...] }`,
//! `{ data: [...] }`, `{ results: [...] }` and a few cash-book variants. This
//! module reduces all of them to a list of row objects.

use serde_json::{Map, Value};

use taskprime_core::text_field;

use crate::error::ClientError;

/// Keys that may hold the row array, in lookup order.
const ROW_KEYS: [&str; 5] = ["data", "results", "items", "cash_book", "cashbook"];

/// Decoded response body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    pub rows: Vec<Value>,
    /// Client id echoed by the backend, when present.
    pub client_id: Option<String>,
}

/// Decode a response body into its rows.
///
/// Invalid JSON is `Malformed`; an explicit `success: false` is `Rejected`.
/// A well-formed body of an unknown shape yields no rows.
pub fn decode_envelope(body: &str) -> Result<Envelope, ClientError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        tracing::warn!(error = %e, preview, "response is not valid JSON");
        ClientError::Malformed(e.to_string())
    })?;

    match value {
        Value::Array(rows) => Ok(Envelope { rows, client_id: None }),
        Value::Object(object) => decode_object(object),
        other => Err(ClientError::Malformed(format!(
            "expected an array or object, found {}",
            json_kind(&other)
        ))),
    }
}

fn decode_object(object: Map<String, Value>) -> Result<Envelope, ClientError> {
    let body = Value::Object(object);

    if body.get("success") == Some(&Value::Bool(false)) {
        let message = text_field(&body, &["message", "error", "detail"])
            .unwrap_or_else(|| "success=false".to_string());
        return Err(ClientError::Rejected(message));
    }

    let client_id = text_field(&body, &["client_id"]);

    if let Some(rows) = ROW_KEYS
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_array))
    {
        return Ok(Envelope { rows: rows.clone(), client_id });
    }

    if let Some(row @ Value::Object(_)) = body.get("data") {
        return Ok(Envelope { rows: vec![row.clone()], client_id });
    }

    // A single bare record (e.g. one debtor) is returned as-is.
    if body.get("code").is_some() {
        return Ok(Envelope { rows: vec![body], client_id });
    }

    tracing::warn!(keys = ?body.as_object().map(|o| o.keys().cloned().collect::<Vec<_>>()), "no rows found in response");
    Ok(Envelope { rows: Vec::new(), client_id })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
