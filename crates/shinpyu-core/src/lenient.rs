//! Forgiving field decoders for the content document.
//!
//! A document that is valid JSON always renders: fields of an unexpected
//! type are coerced to text where that makes sense and dropped otherwise,
//! never failing the whole document.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::ceremony::Ceremony;

/// Text of a scalar value; `null`, arrays and objects have none.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Optional text field accepting strings, numbers and booleans.
pub(crate) fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer).ok().and_then(scalar_text))
}

/// Text field that reads as empty when missing, `null` or not a scalar.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_text(deserializer)?.unwrap_or_default())
}

/// Section or setting of type `T`; a value of the wrong shape is dropped.
pub(crate) fn section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer).unwrap_or(Value::Null);
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            tracing::warn!("Ignoring malformed {}: {}", std::any::type_name::<T>(), e);
            Ok(None)
        }
    }
}

/// JavaScript-style truthiness, used for on/off switches.
pub(crate) fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer).unwrap_or(Value::Null) {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Ceremony list; anything but an array means "no ceremony data".
///
/// Array entries that are not objects are skipped.
pub(crate) fn ceremonies<'de, D>(deserializer: D) -> Result<Option<Vec<Ceremony>>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer).unwrap_or(Value::Null) {
        Value::Array(items) => items,
        Value::Null => return Ok(None),
        other => {
            tracing::warn!("Ceremonies must be a list, found {}", json_kind(&other));
            return Ok(None);
        }
    };

    let list = items
        .into_iter()
        .filter_map(|item| {
            if !item.is_object() {
                tracing::warn!("Skipping ceremony entry of type {}", json_kind(&item));
                return None;
            }
            serde_json::from_value::<Ceremony>(item).ok()
        })
        .collect();
    Ok(Some(list))
}

/// Map of names to paths; entries whose value is not text are dropped.
pub(crate) fn text_map<'de, D>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer).unwrap_or(Value::Null) {
        Value::Object(map) => Ok(Some(
            map.into_iter()
                .filter_map(|(k, v)| scalar_text(v).map(|v| (k, v)))
                .collect(),
        )),
        _ => Ok(None),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
