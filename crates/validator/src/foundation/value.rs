//! Helpers over `serde_json::Value` field values

use serde_json::Value;
use std::borrow::Cow;

/// Returns true for `null`, the empty string and the empty array.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Renders a value the way it appears in messages and string rules.
///
/// Strings are returned verbatim and `null` as the empty string. Arrays and
/// objects are rendered as compact JSON.
#[must_use]
pub fn display(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

/// Interprets a value as a number.
///
/// JSON numbers are taken as-is; strings are parsed after trimming.
#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Resolves a dot-separated path inside `root`.
///
/// Returns `None` when `root` is not a container at all, `Some(None)` when
/// the path does not exist, and `Some(Some(value))` otherwise. Array
/// elements are addressed by decimal index.
#[must_use]
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<Option<&'a Value>> {
    if !root.is_object() {
        return None;
    }

    let mut current = root;
    for segment in path.split('.') {
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return Some(None),
        }
    }
    Some(Some(current))
}
