//! Shared coercion helpers for the loosely-typed source documents.
//!
//! The documents come from hand-edited JSON, so every numeric field is read
//! best-effort: numbers pass through, numeric strings parse, everything else
//! collapses to a safe default instead of failing the load.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Reads an amount field, accepting numbers and numeric strings.
/// Missing or unparseable values read as `0.0`.
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(coerce_amount).unwrap_or(0.0))
}

/// Reads a list of member numbers, accepting integers and integer strings.
/// Non-integer entries are dropped; anything that is not an array reads as
/// an empty list.
pub fn lenient_numbers<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        Some(Value::Array(items)) => Ok(items.into_iter().filter_map(coerce_integer).collect()),
        _ => Ok(Vec::new()),
    }
}

/// Reads an optional non-negative count. Negative, fractional, or
/// non-numeric values read as `None` so callers can apply their fallback.
pub fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(coerce_integer)
        .and_then(|n| u32::try_from(n).ok()))
}

/// Reads a text field, stringifying numbers and collapsing anything else
/// to an empty string.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(coerce_string).unwrap_or_default())
}

/// Reads an optional text field; non-text values read as absent.
pub fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }))
}

fn coerce_string(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}

fn coerce_amount(value: Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn coerce_integer(value: Value) -> Option<i64> {
    match value {
        Value::Number(number) => {
            if let Some(n) = number.as_i64() {
                Some(n)
            } else {
                number
                    .as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            }
        }
        Value::String(text) => {
            let trimmed = text.trim();
            trimmed.parse::<i64>().ok().or_else(|| {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}
