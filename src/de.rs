//! Lenient field deserializers.
//!
//! The CMS hands us loosely typed JSON: a field may be a string or a list, a
//! number or a numeric string, an object or PHP's empty array. Each helper here
//! folds one of those shapes into a single canonical Rust type so renderers
//! never branch on the raw representation.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

fn scalar_text(value: Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn scalar_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// A single value or a list of values, always yielding a list.
pub(crate) fn one_or_many<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).into_iter().collect(),
    })
}

/// A list of records; anything that is not an array becomes empty.
pub(crate) fn lenient_list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(d)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("skip malformed list entry: {e}");
                None
            }
        })
        .collect())
}

/// An object, or nothing. PHP serializes an empty associative array as `[]`.
pub(crate) fn lenient_object<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(d)?;
    if !value.is_object() {
        return Ok(None);
    }

    match serde_json::from_value(value) {
        Ok(record) => Ok(Some(record)),
        Err(e) => {
            tracing::warn!("skip malformed object: {e}");
            Ok(None)
        }
    }
}

pub(crate) fn lenient_string<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(d)?).unwrap_or_default())
}

/// A string passed through untouched, for values like URLs that must stay verbatim.
pub(crate) fn verbatim_string<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

pub(crate) fn optional_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(d)?))
}

pub(crate) fn lenient_id<'de, D>(d: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let id = scalar_number(&Value::deserialize(d)?).unwrap_or_default();
    Ok(if id > 0.0 { id as u64 } else { 0 })
}

/// Rating as a number; anything unparseable counts as zero.
pub(crate) fn lenient_rating<'de, D>(d: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_number(&Value::deserialize(d)?).unwrap_or_default())
}

/// A price; zero is how the CMS encodes "no price", so it maps to `None`.
pub(crate) fn lenient_price<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_number(&Value::deserialize(d)?).filter(|price| *price != 0.0))
}

/// Whole minutes, truncated like the backend's integer cast; non-positive is absent.
pub(crate) fn lenient_minutes<'de, D>(d: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let minutes = scalar_number(&Value::deserialize(d)?).map(f64::trunc);
    Ok(minutes
        .filter(|m| *m >= 1.0)
        .map(|m| m.min(u32::MAX as f64) as u32))
}

/// An image reference: either the bare URL or an attachment object carrying `guid`.
pub(crate) fn lenient_image<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Object(mut attachment) => attachment.remove("guid").and_then(scalar_text),
        other @ Value::String(_) => scalar_text(other),
        _ => None,
    })
}
