//! Value-parsing helpers used as pre-comparison transforms.
//!
//! Called directly, these propagate usage errors for non-string input or
//! unparseable text. Wrapped as `map_before` transforms through the adapter
//! functions, those same failures are contained and become a plain mismatch.

use crate::constraint::MapFn;
use crate::error::MatchError;
use crate::value::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Parse an ISO-8601 string as a date, a time, or a datetime, in that order
/// of preference.
///
/// A trailing `Z` or an explicit offset yields a timestamp normalized to UTC;
/// a datetime without zone designator stays naive. Non-string input is a
/// usage error.
pub fn parse_iso(value: &Value) -> Result<Value, MatchError> {
    let Value::String(text) = value else {
        return Err(MatchError::SubjectNotText { kind: value.kind() });
    };
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(Value::Date(date));
    }
    for format in ["%H:%M:%S%.f", "%H:%M"] {
        if let Ok(time) = NaiveTime::parse_from_str(text, format) {
            return Ok(Value::Time(time));
        }
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(Value::Timestamp(instant.with_timezone(&Utc).fixed_offset()));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(Value::DateTime(datetime));
        }
    }
    Err(MatchError::IsoFormat {
        input: text.clone(),
    })
}

/// Parse a string as an integer.
pub fn parse_int_string(value: &Value) -> Result<Value, MatchError> {
    let Value::String(text) = value else {
        return Err(MatchError::SubjectNotText { kind: value.kind() });
    };
    text.parse::<i64>()
        .map(Value::Int)
        .map_err(|_| MatchError::NumberFormat {
            input: text.clone(),
        })
}

/// Parse a string as a float.
pub fn parse_float_string(value: &Value) -> Result<Value, MatchError> {
    let Value::String(text) = value else {
        return Err(MatchError::SubjectNotText { kind: value.kind() });
    };
    text.parse::<f64>()
        .map(Value::Float)
        .map_err(|_| MatchError::NumberFormat {
            input: text.clone(),
        })
}

/// Parse a string as a number: integer first, float as a fallback.
pub fn parse_number_string(value: &Value) -> Result<Value, MatchError> {
    parse_int_string(value).or_else(|_| parse_float_string(value))
}

/// [`parse_iso`] as a `map_before` transform.
pub fn iso() -> MapFn {
    MapFn::new(|value| parse_iso(value).map_err(anyhow::Error::from))
}

/// [`parse_int_string`] as a `map_before` transform.
pub fn int_string() -> MapFn {
    MapFn::new(|value| parse_int_string(value).map_err(anyhow::Error::from))
}

/// [`parse_float_string`] as a `map_before` transform.
pub fn float_string() -> MapFn {
    MapFn::new(|value| parse_float_string(value).map_err(anyhow::Error::from))
}

/// [`parse_number_string`] as a `map_before` transform.
pub fn number_string() -> MapFn {
    MapFn::new(|value| parse_number_string(value).map_err(anyhow::Error::from))
}
