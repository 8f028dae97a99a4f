//! Containment constraints and order-insensitive sequence equality.

use crate::error::MatchError;
use crate::expected::Expected;
use crate::value::{hash_key, Value};
use std::collections::HashMap;

/// Subset and superset containment.
///
/// For mapping subjects compared against mapping operands, containment is
/// evaluated over key-value pairs; a mapping subject against a sequence
/// operand is evaluated over its keys; every other container kind is
/// evaluated over its elements. Operand elements may be nested matchers.
#[derive(Debug, Default, Clone)]
pub(crate) struct ContainSpec {
    pub subset_of: Option<Expected>,
    pub superset_of: Option<Expected>,
}

impl ContainSpec {
    pub fn check(&self, subject: &Value) -> Result<bool, MatchError> {
        if let Some(operand) = &self.subset_of {
            if !check_subset(subject, operand)? {
                return Ok(false);
            }
        }
        if let Some(operand) = &self.superset_of {
            if !check_superset(subject, operand)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Every subject element (or pair) must be present in the operand.
fn check_subset(subject: &Value, operand: &Expected) -> Result<bool, MatchError> {
    if let (Value::Map(entries), Some(pairs)) = (subject, operand.as_pairs()) {
        for (key, actual) in entries {
            if !pairs_contain(&pairs, key, actual)? {
                return Ok(false);
            }
        }
        return Ok(true);
    }
    let (Some(elements), Some(items)) = (subject.elements(), operand.as_items()) else {
        return Ok(false);
    };
    for element in &elements {
        if !items_contain(&items, element)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Every operand element (or pair) must be present in the subject.
fn check_superset(subject: &Value, operand: &Expected) -> Result<bool, MatchError> {
    if let (Value::Map(entries), Some(pairs)) = (subject, operand.as_pairs()) {
        for (key, expected) in &pairs {
            let found = match entries.iter().find(|(k, _)| k == key) {
                Some((_, actual)) => expected.matches_value(actual)?,
                None => false,
            };
            if !found {
                return Ok(false);
            }
        }
        return Ok(true);
    }
    let (Some(elements), Some(items)) = (subject.elements(), operand.as_items()) else {
        return Ok(false);
    };
    for item in &items {
        let mut found = false;
        for element in &elements {
            if item.matches_value(element)? {
                found = true;
                break;
            }
        }
        if !found {
            return Ok(false);
        }
    }
    Ok(true)
}

fn items_contain(items: &[Expected], value: &Value) -> Result<bool, MatchError> {
    for item in items {
        if item.matches_value(value)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn pairs_contain(
    pairs: &[(Value, Expected)],
    key: &Value,
    value: &Value,
) -> Result<bool, MatchError> {
    for (k, expected) in pairs {
        if k == key && expected.matches_value(value)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Order-insensitive equality between expected items and subject elements:
/// multiset equality generalized to operands that may hold nested matchers.
///
/// When both sides consist of hashable plain values, a linear frequency count
/// decides; otherwise each expected item greedily claims a distinct matching
/// element, which is quadratic but correct for arbitrary nested values.
pub(crate) fn multiset_matches(
    expected: &[Expected],
    actual: &[Value],
) -> Result<bool, MatchError> {
    if expected.len() != actual.len() {
        return Ok(false);
    }
    let expected_keys: Option<Vec<String>> = expected
        .iter()
        .map(|item| match item {
            Expected::Value(v) => hash_key(v),
            _ => None,
        })
        .collect();
    let actual_keys: Option<Vec<String>> = actual.iter().map(hash_key).collect();
    if let (Some(ek), Some(ak)) = (expected_keys, actual_keys) {
        let mut counts: HashMap<String, i64> = HashMap::new();
        for k in ek {
            *counts.entry(k).or_insert(0) += 1;
        }
        for k in ak {
            *counts.entry(k).or_insert(0) -= 1;
        }
        return Ok(counts.values().all(|&c| c == 0));
    }

    let mut used = vec![false; actual.len()];
    'outer: for item in expected {
        for (i, element) in actual.iter().enumerate() {
            if !used[i] && item.matches_value(element)? {
                used[i] = true;
                continue 'outer;
            }
        }
        return Ok(false);
    }
    Ok(true)
}
