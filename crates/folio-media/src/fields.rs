//! Read-path normalization of image fields inside JSON payloads.

use serde_json::Value;

use crate::normalize::normalize;

/// Normalize the named string fields of a JSON object, or of every element of
/// a JSON array (recursively for nested arrays).
///
/// Non-string field values and non-object payloads are returned untouched, so
/// this is safe to apply to any response body.
#[must_use]
pub fn normalize_image_fields(payload: Value, fields: &[&str]) -> Value {
    match payload {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| normalize_image_fields(item, fields))
                .collect(),
        ),
        Value::Object(mut map) => {
            for field in fields {
                if let Some(Value::String(url)) = map.get_mut(*field) {
                    *url = normalize(url);
                }
            }
            Value::Object(map)
        }
        other => other,
    }
}
