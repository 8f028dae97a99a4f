//! Numeric bound and tolerance constraints.

use crate::value::{compare_numeric, Value};
use std::cmp::Ordering;

/// Default two-sided relative tolerance for close-to matching (1 per mille of
/// the target magnitude).
pub const DEFAULT_CLOSE_TO_ERROR: f64 = 0.001;

/// Inclusive and exclusive numeric bounds.
#[derive(Debug, Default, Clone)]
pub(crate) struct Bounds {
    pub min: Option<Value>,
    pub max: Option<Value>,
    pub min_strict: Option<Value>,
    pub max_strict: Option<Value>,
}

impl Bounds {
    /// Whether the subject satisfies every engaged bound. Incomparable pairs
    /// (non-numeric bound, NaN) fail the bound.
    pub fn check(&self, subject: &Value) -> bool {
        let within = |bound: &Option<Value>, accept: &[Ordering]| match bound {
            None => true,
            Some(b) => compare_numeric(subject, b).is_some_and(|ord| accept.contains(&ord)),
        };
        within(&self.min, &[Ordering::Greater, Ordering::Equal])
            && within(&self.max, &[Ordering::Less, Ordering::Equal])
            && within(&self.min_strict, &[Ordering::Greater])
            && within(&self.max_strict, &[Ordering::Less])
    }
}

/// Whether the subject lies within `error × |target|` of the target. The
/// tolerance is relative to the target, so a zero target only admits an exact
/// match.
pub(crate) fn check_close_to(target: &Value, error: f64, subject: &Value) -> bool {
    match (target.as_f64(), subject.as_f64()) {
        (Some(t), Some(s)) => (s - t).abs() <= error * t.abs(),
        _ => false,
    }
}
