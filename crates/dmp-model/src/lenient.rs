//! Tolerant readers for persisted documents.
//!
//! An optional attribute of the wrong type reads as absent instead of
//! failing the whole question.

use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The value when it has the expected shape, otherwise `T::default()`.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// `enabled` flag: anything but a boolean counts as enabled.
pub(crate) fn bool_or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool().unwrap_or(true))
}

/// A number, also accepted as a numeric string (`"300"`).
pub(crate) fn number<'de, D, N>(deserializer: D) -> Result<Option<N>, D::Error>
where
    D: Deserializer<'de>,
    N: DeserializeOwned + FromStr,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString<N> {
        Number(N),
        String(String),
    }

    let value = Value::deserialize(deserializer)?;
    Ok(match serde_json::from_value::<NumberOrString<N>>(value) {
        Ok(NumberOrString::Number(number)) => Some(number),
        Ok(NumberOrString::String(raw)) => raw.trim().parse().ok(),
        Err(_) => None,
    })
}

/// Free text; numbers and booleans are kept in their JSON spelling.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}

/// A required list; entries of the wrong shape are skipped.
pub(crate) fn items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = Vec::<Value>::deserialize(deserializer)?;
    Ok(collect_valid(items))
}

/// An optional list; a non-list reads as empty.
pub(crate) fn items_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => collect_valid(items),
        _ => Vec::new(),
    })
}

/// Like [`items_or_empty`], but a non-list reads as absent.
pub(crate) fn optional_items<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(collect_valid(items)),
        _ => None,
    })
}

fn collect_valid<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}
