//! Lenient field decoders for provider payloads.
//!
//! The provider is inconsistent about types: the same id is a number in one
//! endpoint and a string in another, prices come as `3.5` or `"3.5"`, and
//! dates use several layouts. These helpers are plugged in through
//! `#[serde(deserialize_with = ...)]`, with `serialize_with` counterparts
//! where a value must be written back in the provider layout.

use crate::constants::{DATETIME_FORMAT, DATE_FORMAT, DATE_FORMAT_ISO, TIME_FORMAT};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

fn value_to_string<E: Error>(value: Value) -> Result<String, E> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(E::custom(format!("expected string or number, got {other}"))),
    }
}

pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    value_to_string(Value::deserialize(deserializer)?)
}

pub(crate) fn option_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => value_to_string(value).map(Some),
    }
}

pub(crate) fn f64_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("number {n} out of range"))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| D::Error::custom(format!("invalid number {s:?}: {e}"))),
        other => Err(D::Error::custom(format!("expected number, got {other}"))),
    }
}

pub(crate) fn i64_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| D::Error::custom(format!("expected integer, got {n}"))),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| D::Error::custom(format!("invalid integer {s:?}: {e}"))),
        other => Err(D::Error::custom(format!("expected integer, got {other}"))),
    }
}

pub(crate) fn option_u32_or_string<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected count, got {n}"))),
        Value::String(s) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid count {s:?}: {e}"))),
        other => Err(D::Error::custom(format!("expected count, got {other}"))),
    }
}

/// `2023/05/14`, or `2023-05-14` on some networks.
pub(crate) fn broadcast_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&s, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(&s, DATE_FORMAT_ISO))
        .map_err(|e| D::Error::custom(format!("invalid date {s:?}: {e}")))
}

pub(crate) fn broadcast_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&s, TIME_FORMAT)
        .map_err(|e| D::Error::custom(format!("invalid time {s:?}: {e}")))
}

pub(crate) fn provider_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT)
        .map_err(|e| D::Error::custom(format!("invalid datetime {s:?}: {e}")))
}

pub(crate) fn option_provider_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT)
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid datetime {s:?}: {e}"))),
    }
}

pub(crate) fn serialize_provider_datetime<S>(
    value: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(DATETIME_FORMAT))
}

pub(crate) fn serialize_option_provider_datetime<S>(
    value: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serialize_provider_datetime(value, serializer),
        None => serializer.serialize_none(),
    }
}

/// Quoted and escaped JSON string literal, for hand-written `Display` output.
pub(crate) fn json_string(value: &str) -> String {
    Value::from(value).to_string()
}
