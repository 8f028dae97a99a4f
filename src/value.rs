//! The dynamic subject model.
//!
//! Matchers evaluate against [`Value`], a self-describing runtime value in the
//! spirit of a JSON document extended with the kinds the assertion domain
//! needs: distinct sequence flavours, byte strings, temporal values and
//! runtime-kind tags. Subjects are typically produced from native Rust values
//! via `From`, or from `serde_json::Value` for payload-shaped data.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::de::Deserializer;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Runtime kind of a [`Value`], including the abstract kinds used by
/// `instance_of`-style constraints.
///
/// Concrete kinds are returned by [`Value::kind`]; abstract kinds only appear
/// as constraint operands. The kinds form a small lattice queried through
/// [`Kind::is_within`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The null value
    Null,
    /// Booleans
    Bool,
    /// Signed 64-bit integers
    Int,
    /// 64-bit floating point numbers
    Float,
    /// UTF-8 text
    String,
    /// Byte strings
    Bytes,
    /// Ordered sequences
    List,
    /// Fixed sequences
    Tuple,
    /// Unordered duplicate-free collections
    Set,
    /// Key-value mappings
    Map,
    /// Calendar dates without time of day
    Date,
    /// Times of day without a date
    Time,
    /// Naive (zone-less) datetimes
    DateTime,
    /// Timezone-aware datetimes
    Timestamp,
    /// Runtime-kind tags themselves
    Type,
    /// Abstract: any integer or float
    Number,
    /// Abstract: any text or byte string
    Text,
    /// Abstract: any date, time or datetime kind
    Temporal,
    /// Abstract: any sized, iterable kind (text included)
    Collection,
    /// Abstract: any data kind (everything except kind tags)
    Value,
    /// Abstract: anything at all
    Any,
}

impl Kind {
    /// Whether this kind is `ancestor` or a descendant of it in the kind
    /// lattice.
    pub fn is_within(self, ancestor: Kind) -> bool {
        if self == ancestor || ancestor == Kind::Any {
            return true;
        }
        match ancestor {
            Kind::Number => matches!(self, Kind::Int | Kind::Float),
            Kind::Text => matches!(self, Kind::String | Kind::Bytes),
            Kind::Temporal => matches!(
                self,
                Kind::Date | Kind::Time | Kind::DateTime | Kind::Timestamp
            ),
            Kind::Collection => matches!(
                self,
                Kind::String
                    | Kind::Bytes
                    | Kind::Text
                    | Kind::List
                    | Kind::Tuple
                    | Kind::Set
                    | Kind::Map
            ),
            Kind::Value => !matches!(self, Kind::Type | Kind::Any),
            _ => false,
        }
    }

    /// Canonical lowercase name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Bytes => "bytes",
            Kind::List => "list",
            Kind::Tuple => "tuple",
            Kind::Set => "set",
            Kind::Map => "map",
            Kind::Date => "date",
            Kind::Time => "time",
            Kind::DateTime => "datetime",
            Kind::Timestamp => "timestamp",
            Kind::Type => "type",
            Kind::Number => "number",
            Kind::Text => "text",
            Kind::Temporal => "temporal",
            Kind::Collection => "collection",
            Kind::Value => "value",
            Kind::Any => "any",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamic runtime value compared against matchers.
#[derive(Debug, Clone)]
pub enum Value {
    /// The null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text value
    String(String),
    /// Byte-string value
    Bytes(Vec<u8>),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Fixed sequence of values; never equal to a list of the same elements
    Tuple(Vec<Value>),
    /// Unordered duplicate-free collection; equality ignores element order
    Set(Vec<Value>),
    /// Mapping with arbitrary keys; equality ignores entry order
    Map(Vec<(Value, Value)>),
    /// Calendar date
    Date(NaiveDate),
    /// Time of day
    Time(NaiveTime),
    /// Naive (zone-less) datetime
    DateTime(NaiveDateTime),
    /// Timezone-aware datetime; equality compares instants
    Timestamp(DateTime<FixedOffset>),
    /// A runtime-kind tag as a first-class value
    Kind(Kind),
}

impl Value {
    /// The concrete runtime kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Bytes(_) => Kind::Bytes,
            Value::List(_) => Kind::List,
            Value::Tuple(_) => Kind::Tuple,
            Value::Set(_) => Kind::Set,
            Value::Map(_) => Kind::Map,
            Value::Date(_) => Kind::Date,
            Value::Time(_) => Kind::Time,
            Value::DateTime(_) => Kind::DateTime,
            Value::Timestamp(_) => Kind::Timestamp,
            Value::Kind(_) => Kind::Type,
        }
    }

    /// Build a byte-string value.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(bytes.into())
    }

    /// Build a set value; duplicates are kept as given and ignored by equality.
    pub fn set(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Set(items.into_iter().collect())
    }

    /// Build a tuple value.
    pub fn tuple(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Tuple(items.into_iter().collect())
    }

    /// Build a map value from key-value entries.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Map(entries.into_iter().collect())
    }

    /// Number of elements for sized kinds: characters for text, bytes for
    /// byte strings, elements for sequences and sets, entries for maps.
    pub fn size(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::Bytes(b) => Some(b.len()),
            Value::List(xs) | Value::Tuple(xs) | Value::Set(xs) => Some(xs.len()),
            Value::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// The elements iterated for element-wise constraints. Text yields
    /// one-character strings, byte strings yield integers, maps yield keys.
    pub fn elements(&self) -> Option<Vec<Value>> {
        match self {
            Value::String(s) => Some(s.chars().map(|c| Value::String(c.to_string())).collect()),
            Value::Bytes(b) => Some(b.iter().map(|&byte| Value::Int(byte as i64)).collect()),
            Value::List(xs) | Value::Tuple(xs) | Value::Set(xs) => Some(xs.clone()),
            Value::Map(entries) => Some(entries.iter().map(|(k, _)| k.clone()).collect()),
            _ => None,
        }
    }

    /// Numeric rendition for ordering and tolerance checks.
    pub(crate) fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

/// Numeric ordering across the integer and float kinds. `None` for non-numeric
/// operands or incomparable floats (NaN).
pub(crate) fn compare_numeric(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Some(x.cmp(y)),
        _ => a.as_f64()?.partial_cmp(&b.as_f64()?),
    }
}

/// Canonical hashable key for a value tree, when one exists.
///
/// Unordered containers and NaN have no stable key and fall back to pairwise
/// comparison in multiset checks. Child keys are length-prefixed so nested
/// sequences cannot collide with flat ones.
pub(crate) fn hash_key(v: &Value) -> Option<String> {
    match v {
        Value::Null => Some("n".to_string()),
        Value::Bool(b) => Some(format!("b:{b}")),
        Value::Int(i) => Some(format!("i:{i}")),
        Value::Float(f) => {
            if f.is_nan() {
                None
            } else {
                let normalized = if *f == 0.0 { 0.0 } else { *f };
                Some(format!("f:{}", normalized.to_bits()))
            }
        }
        Value::String(s) => Some(format!("s:{s}")),
        Value::Bytes(b) => Some(format!("y:{b:?}")),
        Value::Date(d) => Some(format!("d:{d}")),
        Value::Time(t) => Some(format!("t:{t}")),
        Value::DateTime(dt) => Some(format!("dt:{dt}")),
        Value::Timestamp(ts) => Some(format!("ts:{}", ts.with_timezone(&Utc).to_rfc3339())),
        Value::Kind(k) => Some(format!("k:{k}")),
        Value::List(xs) | Value::Tuple(xs) => {
            let tag = if matches!(v, Value::List(_)) { "l" } else { "u" };
            let mut key = format!("{tag}:");
            for x in xs {
                let child = hash_key(x)?;
                key.push_str(&format!("{}#{child}", child.len()));
            }
            Some(key)
        }
        Value::Set(_) | Value::Map(_) => None,
    }
}

/// Order-insensitive equality over two slices of values.
///
/// Linear frequency counting when every element has a canonical hash key,
/// quadratic pairwise matching otherwise.
pub(crate) fn multiset_eq(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let keys = |xs: &[Value]| -> Option<Vec<String>> { xs.iter().map(hash_key).collect() };
    if let (Some(ka), Some(kb)) = (keys(a), keys(b)) {
        let mut counts: HashMap<String, i64> = HashMap::new();
        for k in ka {
            *counts.entry(k).or_insert(0) += 1;
        }
        for k in kb {
            *counts.entry(k).or_insert(0) -= 1;
        }
        return counts.values().all(|&c| c == 0);
    }
    let mut used = vec![false; b.len()];
    'outer: for x in a {
        for (i, y) in b.iter().enumerate() {
            if !used[i] && x == y {
                used[i] = true;
                continue 'outer;
            }
        }
        return false;
    }
    true
}

fn map_pairs_eq(a: &[(Value, Value)], b: &[(Value, Value)]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used = vec![false; b.len()];
    'outer: for (ka, va) in a {
        for (i, (kb, vb)) in b.iter().enumerate() {
            if !used[i] && ka == kb && va == vb {
                used[i] = true;
                continue 'outer;
            }
        }
        return false;
    }
    true
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => multiset_eq(a, b),
            (Value::Map(a), Value::Map(b)) => map_pairs_eq(a, b),
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Time(a), Value::Time(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            (Value::Kind(a), Value::Kind(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn seq(f: &mut fmt::Formatter<'_>, xs: &[Value], open: &str, close: &str) -> fmt::Result {
            f.write_str(open)?;
            for (i, x) in xs.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{x}")?;
            }
            f.write_str(close)
        }
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Bytes(b) => write!(f, "{b:?}"),
            Value::List(xs) => seq(f, xs, "[", "]"),
            Value::Tuple(xs) => seq(f, xs, "(", ")"),
            Value::Set(xs) => seq(f, xs, "{", "}"),
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
            Value::Date(d) => write!(f, "{d}"),
            Value::Time(t) => write!(f, "{t}"),
            Value::DateTime(dt) => write!(f, "{dt}"),
            Value::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
            Value::Kind(k) => write!(f, "{k}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Kind> for Value {
    fn from(v: Kind) -> Self {
        Value::Kind(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveTime> for Value {
    fn from(v: NaiveTime) -> Self {
        Value::Time(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Value::Timestamp(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v.fixed_offset())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    tracing::warn!(number = %n, "unrepresentable JSON number, mapping to null");
                    Value::Null
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (Value::String(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Bytes(b) => serializer.serialize_bytes(b),
            Value::List(xs) | Value::Tuple(xs) | Value::Set(xs) => {
                let mut seq = serializer.serialize_seq(Some(xs.len()))?;
                for x in xs {
                    seq.serialize_element(x)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    let key = match k {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    map.serialize_entry(&key, v)?;
                }
                map.end()
            }
            Value::Date(d) => serializer.serialize_str(&d.to_string()),
            Value::Time(t) => serializer.serialize_str(&t.to_string()),
            Value::DateTime(dt) => serializer.serialize_str(&dt.to_string()),
            Value::Timestamp(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            Value::Kind(k) => serializer.serialize_str(k.name()),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = serde_json::Value::deserialize(deserializer)?;
        Ok(json.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_kind_lattice() {
        assert!(Kind::Int.is_within(Kind::Number));
        assert!(Kind::Float.is_within(Kind::Number));
        assert!(!Kind::String.is_within(Kind::Number));
        assert!(Kind::String.is_within(Kind::Collection));
        assert!(Kind::Map.is_within(Kind::Collection));
        assert!(Kind::Timestamp.is_within(Kind::Temporal));
        assert!(Kind::Int.is_within(Kind::Value));
        assert!(!Kind::Type.is_within(Kind::Value));
        assert!(Kind::Type.is_within(Kind::Any));
        assert!(Kind::List.is_within(Kind::List));
    }

    #[test]
    fn test_variant_exact_numeric_equality() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_eq!(Value::Int(1), Value::Int(1));
        assert_eq!(Value::Float(1.5), Value::Float(1.5));
    }

    #[test]
    fn test_sequence_kinds_are_distinct() {
        let list = Value::from(vec![1, 2]);
        let tuple = Value::tuple([Value::Int(1), Value::Int(2)]);
        assert_ne!(list, tuple);
    }

    #[test]
    fn test_set_equality_ignores_order() {
        let a = Value::set([Value::Int(1), Value::Int(2), Value::Int(3)]);
        let b = Value::set([Value::Int(3), Value::Int(1), Value::Int(2)]);
        assert_eq!(a, b);
        let c = Value::set([Value::Int(3), Value::Int(3), Value::Int(1)]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_map_equality_ignores_entry_order() {
        let a = Value::map([
            (Value::from("x"), Value::Int(1)),
            (Value::from("y"), Value::Int(2)),
        ]);
        let b = Value::map([
            (Value::from("y"), Value::Int(2)),
            (Value::from("x"), Value::Int(1)),
        ]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_json() {
        let v = Value::from(json!({"id": 7, "tags": ["a", "b"], "score": 1.5}));
        let Value::Map(entries) = &v else {
            panic!("expected map");
        };
        assert_eq!(entries.len(), 3);
        let score = entries.iter().find(|(k, _)| *k == Value::from("score"));
        assert_eq!(score.map(|(_, v)| v.clone()), Some(Value::Float(1.5)));
        let tags = entries.iter().find(|(k, _)| *k == Value::from("tags"));
        assert_eq!(tags.map(|(_, v)| v.clone()), Some(Value::from(vec!["a", "b"])));
    }

    #[test]
    fn test_hash_key_distinguishes_nesting() {
        let flat = Value::from(vec!["a,s:b"]);
        let nested = Value::from(vec!["a", "b"]);
        assert_ne!(hash_key(&flat), hash_key(&nested));
    }

    #[test]
    fn test_multiset_eq_fallback_for_unhashable() {
        let a = [Value::set([Value::Int(1)]), Value::Int(2)];
        let b = [Value::Int(2), Value::set([Value::Int(1)])];
        assert!(multiset_eq(&a, &b));
        assert!(!multiset_eq(&a, &[Value::Int(2), Value::Int(2)]));
    }

    #[test]
    fn test_text_elements_and_size() {
        let s = Value::from("abc");
        assert_eq!(s.size(), Some(3));
        let elems = s.elements().unwrap();
        assert_eq!(elems[0], Value::from("a"));

        let b = Value::bytes(*b"ab");
        assert_eq!(b.elements().unwrap()[0], Value::Int(97));
    }

    #[test]
    fn test_display_is_reconstructible() {
        let v = Value::from(vec![1, 2]);
        assert_eq!(v.to_string(), "[1, 2]");
        assert_eq!(Value::from("a\"b").to_string(), "\"a\\\"b\"");
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
    }
}
