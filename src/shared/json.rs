//! JSON payload helpers
//!
//! Clients send loosely-typed JSON objects. These helpers implement the
//! coercions the API promises on top of them: JavaScript-style truthiness
//! (used for `rant` and for default substitution) and removal of keys the
//! server owns.

use serde_json::{Map, Value};

/// A JSON object as received from a client
pub type JsonObject = Map<String, Value>;

/// Truthiness of an optional JSON value.
///
/// Absent, `null`, `false`, `0`, `NaN` and `""` are falsy; everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Set `key` to `default` unless the object already holds a truthy value there
pub fn default_if_falsy(object: &mut JsonObject, key: &str, default: &str) {
    if !is_truthy(object.get(key)) {
        object.insert(key.to_string(), Value::String(default.to_string()));
    }
}

/// Drop keys clients are not allowed to write
pub fn strip_keys(object: &mut JsonObject, keys: &[&str]) {
    for key in keys {
        object.remove(*key);
    }
}
