//! Wrappers around user-supplied callables.
//!
//! Predicates and pre-comparison transforms are the only places arbitrary
//! user code runs during evaluation. Both are exception-contained: a panic or
//! an `Err` from the callable is converted into a mismatch of the owning
//! constraint and never propagates out of the evaluation.

use crate::value::Value;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// A one-argument boolean predicate over the subject.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&Value) -> bool + Send + Sync>);

impl Predicate {
    /// Wrap a predicate closure.
    pub fn new(f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Evaluate the predicate; a panic counts as a mismatch.
    pub(crate) fn check(&self, subject: &Value) -> bool {
        match catch_unwind(AssertUnwindSafe(|| (self.0)(subject))) {
            Ok(verdict) => verdict,
            Err(_) => {
                tracing::debug!("predicate panicked, treating as mismatch");
                false
            }
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<fn>")
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<fn>")
    }
}

/// A fallible transform applied to the subject before any other constraint.
#[derive(Clone)]
pub struct MapFn(Arc<dyn Fn(&Value) -> anyhow::Result<Value> + Send + Sync>);

impl MapFn {
    /// Wrap a fallible transform closure.
    pub fn new(f: impl Fn(&Value) -> anyhow::Result<Value> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Apply the transform; `None` means the transform failed (error or
    /// panic) and the match must evaluate to false.
    pub(crate) fn apply(&self, subject: &Value) -> Option<Value> {
        match catch_unwind(AssertUnwindSafe(|| (self.0)(subject))) {
            Ok(Ok(mapped)) => Some(mapped),
            Ok(Err(err)) => {
                tracing::trace!(error = %err, "map_before failed, treating as mismatch");
                None
            }
            Err(_) => {
                tracing::debug!("map_before panicked, treating as mismatch");
                None
            }
        }
    }
}

impl fmt::Debug for MapFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<fn>")
    }
}

impl fmt::Display for MapFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<fn>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_verdict() {
        let even = Predicate::new(|v| matches!(v, Value::Int(i) if i % 2 == 0));
        assert!(even.check(&Value::Int(2)));
        assert!(!even.check(&Value::Int(1)));
    }

    #[test]
    fn test_predicate_panic_is_contained() {
        let broken = Predicate::new(|_| panic!("boom"));
        assert!(!broken.check(&Value::Int(1)));
    }

    #[test]
    fn test_map_fn_error_is_contained() {
        let failing = MapFn::new(|_| anyhow::bail!("nope"));
        assert_eq!(failing.apply(&Value::Int(1)), None);

        let doubling = MapFn::new(|v| match v {
            Value::Int(i) => Ok(Value::Int(i * 2)),
            _ => anyhow::bail!("not an int"),
        });
        assert_eq!(doubling.apply(&Value::Int(2)), Some(Value::Int(4)));
        assert_eq!(doubling.apply(&Value::Null), None);
    }

    #[test]
    fn test_map_fn_panic_is_contained() {
        let broken = MapFn::new(|_| panic!("boom"));
        assert_eq!(broken.apply(&Value::Int(1)), None);
    }
}
