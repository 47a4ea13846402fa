//! Recovery of a JSON array from a noisy model response.
//!
//! Two tiers: parse the whole response; otherwise parse the span from the
//! first `[` to the last `]`. Anything else is `None`.

use serde_json::Value;

/// Recover a JSON array from `raw`.
///
/// A top-level object is accepted when one of its fields holds an array
/// (JSON-mode models often answer `{"sesgos": [...]}`). With several array
/// fields the one under the alphabetically first key wins, whatever the
/// document order.
#[must_use]
pub fn extract_json_array(raw: &str) -> Option<Vec<Value>> {
    if let Some(array) = serde_json::from_str::<Value>(raw).ok().and_then(into_array) {
        return Some(array);
    }

    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end < start {
        return None;
    }
    serde_json::from_str::<Value>(&raw[start..=end])
        .ok()
        .and_then(into_array)
}

fn into_array(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(key, field)| match field {
                Value::Array(items) => Some((key, items)),
                _ => None,
            })
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, items)| items),
        _ => None,
    }
}
