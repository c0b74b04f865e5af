//! Lenient field readers for model-produced JSON.
//!
//! Models are free to send `null`, numbers or nested values where a string is
//! expected, or a bare value where a list or object is expected. These helpers
//! coerce such values instead of rejecting the whole document.

use serde::de::{DeserializeOwned, Error as _, IgnoredAny};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Fallback for a value that is not the JSON object a type is read from.
pub trait FromLooseValue: Sized {
    fn from_loose_value(value: Value) -> Self;
}

pub fn value_to_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    }
}

pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_to_text)
}

pub fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().map(value_to_text).collect(),
        single => vec![value_to_text(single)],
    })
}

/// Consume whatever the field holds and yield the default.
pub fn discard<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(T::default())
}

/// Object-shaped field: `null` is the default, any other non-object goes
/// through [`FromLooseValue`].
pub fn lenient_object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + FromLooseValue + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(T::default()),
        object @ Value::Object(_) => T::deserialize(object).map_err(D::Error::custom),
        other => Ok(T::from_loose_value(other)),
    }
}

/// List of objects. A lone object is one item, other non-arrays are an
/// empty list. `null` items are skipped and scalar items go through
/// [`FromLooseValue`].
pub fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + FromLooseValue,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        _ => Vec::new(),
    };

    items
        .into_iter()
        .filter(|item| !item.is_null())
        .map(|item| match item {
            object @ Value::Object(_) => T::deserialize(object).map_err(D::Error::custom),
            other => Ok(T::from_loose_value(other)),
        })
        .collect()
}
