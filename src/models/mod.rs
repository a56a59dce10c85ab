pub mod profile;
pub mod voyager;

use eyre::{Result, eyre};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Drops `null` members so they deserialize like missing keys.
pub fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

/// Parses a JSON object into `T`; anything that is not an object is rejected.
pub fn from_object<T: DeserializeOwned>(value: Value, kind: &str) -> Result<T> {
    if !value.is_object() {
        return Err(eyre!("{} document is not a JSON object", kind));
    }

    serde_json::from_value(strip_nulls(value)).map_err(|e| eyre!("malformed {}: {}", kind, e))
}
