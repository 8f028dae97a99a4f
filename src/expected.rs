//! Operands for "must equal" style constraints.
//!
//! Every matcher field that accepts a value to compare against takes an
//! [`Expected`]: either a plain [`Value`], a sequence or mapping that may hold
//! nested matchers per element, or a nested matcher itself. This is what makes
//! matcher composition recursive — `ListMatch::new().all(any_int())` delegates
//! each element comparison to the nested matcher.

use crate::error::MatchError;
use crate::matcher::Match;
use crate::value::Value;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::fmt;
use std::sync::Arc;

/// An operand of an equality-style constraint: a literal value, a container of
/// operands, or a nested matcher.
#[derive(Clone)]
pub enum Expected {
    /// A literal value, compared with plain value equality
    Value(Value),
    /// A sequence whose elements are themselves operands
    List(Vec<Expected>),
    /// A mapping whose values are themselves operands
    Map(Vec<(Value, Expected)>),
    /// A nested matcher; comparison delegates to its evaluation
    Matcher(Arc<dyn Match>),
}

impl Expected {
    /// Evaluate this operand against a subject value.
    ///
    /// Literal operands use value equality; sequence and mapping operands
    /// compare element-wise, delegating to nested operands; matcher operands
    /// evaluate the matcher. Usage errors from nested matchers propagate.
    pub fn matches_value(&self, subject: &Value) -> Result<bool, MatchError> {
        match self {
            Expected::Value(v) => Ok(v == subject),
            Expected::Matcher(m) => m.try_matches(subject),
            Expected::List(items) => {
                let elements = match subject {
                    Value::List(xs) | Value::Tuple(xs) => xs,
                    _ => return Ok(false),
                };
                if items.len() != elements.len() {
                    return Ok(false);
                }
                for (item, element) in items.iter().zip(elements) {
                    if !item.matches_value(element)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Expected::Map(pairs) => {
                let Value::Map(entries) = subject else {
                    return Ok(false);
                };
                if pairs.len() != entries.len() {
                    return Ok(false);
                }
                for (key, expected) in pairs {
                    let Some((_, actual)) = entries.iter().find(|(k, _)| k == key) else {
                        return Ok(false);
                    };
                    if !expected.matches_value(actual)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }

    /// The operand's elements, when it denotes a sequence or set.
    pub(crate) fn as_items(&self) -> Option<Vec<Expected>> {
        match self {
            Expected::List(items) => Some(items.clone()),
            Expected::Value(Value::List(xs) | Value::Tuple(xs) | Value::Set(xs)) => {
                Some(xs.iter().cloned().map(Expected::Value).collect())
            }
            Expected::Value(Value::String(s)) => Some(
                s.chars()
                    .map(|c| Expected::Value(Value::String(c.to_string())))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// The operand's key-value pairs, when it denotes a mapping.
    pub(crate) fn as_pairs(&self) -> Option<Vec<(Value, Expected)>> {
        match self {
            Expected::Map(pairs) => Some(pairs.clone()),
            Expected::Value(Value::Map(entries)) => Some(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), Expected::Value(v.clone())))
                    .collect(),
            ),
            _ => None,
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Value(v) => write!(f, "{v}"),
            Expected::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Expected::Map(pairs) => {
                f.write_str("{")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Expected::Matcher(m) => write!(f, "{m}"),
        }
    }
}

impl fmt::Debug for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Build a sequence operand from heterogeneous items, e.g.
/// `seq([Expected::from(1), any_int().into()])`.
pub fn seq<T: Into<Expected>>(items: impl IntoIterator<Item = T>) -> Expected {
    Expected::List(items.into_iter().map(Into::into).collect())
}

/// Build a mapping operand from key-value entries whose values may be nested
/// matchers, e.g. `map_of([("id", any_uuid().into())])`.
pub fn map_of<K: Into<Value>, V: Into<Expected>>(
    entries: impl IntoIterator<Item = (K, V)>,
) -> Expected {
    Expected::Map(
        entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    )
}

impl From<Value> for Expected {
    fn from(v: Value) -> Self {
        Expected::Value(v)
    }
}

impl<T: Into<Expected>> From<Vec<T>> for Expected {
    fn from(items: Vec<T>) -> Self {
        Expected::List(items.into_iter().map(Into::into).collect())
    }
}

macro_rules! expected_from_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Expected {
                fn from(v: $ty) -> Self {
                    Expected::Value(Value::from(v))
                }
            }
        )*
    };
}

expected_from_value!(
    bool,
    i64,
    i32,
    u32,
    f64,
    f32,
    &str,
    String,
    char,
    crate::value::Kind,
    NaiveDate,
    NaiveTime,
    NaiveDateTime,
    DateTime<FixedOffset>,
    DateTime<Utc>,
);
