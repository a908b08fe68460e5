//! Key-wise merge of two profile JSON objects

use crate::error::MergeError;
use serde_json::Value;

/// Merge `extra` into `base`
///
/// For each key of `extra`: arrays on both sides are concatenated, objects on
/// both sides get a shallow update, anything else is replaced (or added).
pub fn merge_profiles(base: Value, extra: Value) -> Result<Value, MergeError> {
    let Value::Object(mut merged) = base else {
        return Err(MergeError::NotAnObject { side: "base" });
    };
    let Value::Object(extra) = extra else {
        return Err(MergeError::NotAnObject { side: "extra" });
    };

    for (key, value) in extra {
        let slot = merged.entry(key).or_insert(Value::Null);
        match (slot, value) {
            (Value::Array(existing), Value::Array(items)) => existing.extend(items),
            (Value::Object(existing), Value::Object(fields)) => existing.extend(fields),
            (slot, value) => *slot = value,
        }
    }

    Ok(Value::Object(merged))
}
