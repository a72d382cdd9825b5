//! Request payload construction and encoding.

use serde_json::{Map, Value};
use url::form_urlencoded;

use super::TrackError;

/// Key/value map carried in customer and event payloads.
///
/// Insertion order is preserved, so encoded bodies list fields in the
/// order the caller supplied them.
pub type Attributes = Map<String, Value>;

/// Builds the payload for creating or updating a customer.
///
/// The result holds every attribute plus `email`. An `email` key already
/// present in `attributes` is overwritten in place.
#[must_use]
pub fn customer_payload(email: &str, attributes: &Attributes) -> Attributes {
    let mut payload = attributes.clone();
    payload.insert("email".to_string(), Value::String(email.to_string()));
    payload
}

/// Builds the payload for tracking an event.
///
/// `data` is only present when `metadata` is non-empty.
#[must_use]
pub fn event_payload(event_name: &str, metadata: &Attributes) -> Attributes {
    let mut payload = Attributes::new();
    payload.insert("name".to_string(), Value::String(event_name.to_string()));
    if !metadata.is_empty() {
        payload.insert("data".to_string(), Value::Object(metadata.clone()));
    }
    payload
}

/// Encodes a payload as `application/x-www-form-urlencoded`.
///
/// Nested values use bracket notation: objects become `key[sub]=v` and
/// arrays become `key[0]=v`. Booleans encode as `1`/`0`, numbers as their
/// JSON text, and nulls are skipped.
#[must_use]
pub fn encode_form(payload: &Attributes) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in payload {
        append_value(&mut serializer, key, value);
    }
    serializer.finish()
}

/// Encodes a payload as JSON.
///
/// # Errors
///
/// Returns [`TrackError::InvalidRequest`] if serialization fails.
pub fn encode_json(payload: &Attributes) -> Result<Vec<u8>, TrackError> {
    serde_json::to_vec(payload)
        .map_err(|e| TrackError::InvalidRequest(format!("failed to encode JSON payload: {e}")))
}

fn append_value(
    serializer: &mut form_urlencoded::Serializer<'_, String>,
    key: &str,
    value: &Value,
) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => {
            serializer.append_pair(key, if *flag { "1" } else { "0" });
        }
        Value::Number(number) => {
            serializer.append_pair(key, &number.to_string());
        }
        Value::String(text) => {
            serializer.append_pair(key, text);
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                append_value(serializer, &format!("{key}[{index}]"), item);
            }
        }
        Value::Object(fields) => {
            for (name, field) in fields {
                append_value(serializer, &format!("{key}[{name}]"), field);
            }
        }
    }
}
