//! Composite matchers and the evaluation contract.
//!
//! A matcher is an immutable configuration record evaluated against a subject
//! through [`Match::try_matches`]. Each composite follows the same fixed
//! order: the pre-comparison transform runs first (failures contained), a
//! null subject is decided solely by the `optional` flag, then the runtime
//! kind admission check, the exact `equals` operand, the structural
//! constraints, and the `satisfies` predicate last. The first failing step
//! aborts the evaluation.
//!
//! The assertion surface is the equality operator with the matcher on the
//! left: `assert!(matcher == subject)`. Usage errors cannot be expressed as a
//! boolean and panic out of the comparison so that the test failure points at
//! the assertion.

use crate::error::MatchError;
use crate::value::Value;
use std::borrow::Cow;
use std::fmt;

pub mod any;
pub mod collection;
pub mod number;
pub mod one_of;
pub mod string;
pub mod temporal;

use crate::constraint::MapFn;

/// The matcher contract: evaluate a subject to a verdict, raising only the
/// documented usage errors.
pub trait Match: fmt::Debug + fmt::Display + Send + Sync {
    /// Evaluate this matcher against a subject.
    ///
    /// Constraint mismatches and contained callable failures yield
    /// `Ok(false)`; `Err` is reserved for configurations or subjects that
    /// cannot be meaningfully interpreted as a pass/fail verdict.
    fn try_matches(&self, subject: &Value) -> Result<bool, MatchError>;
}

/// Conversion of native values into matcher subjects, enabling direct
/// comparisons such as `matcher == 3` or `matcher == vec![1, 2, 3]`.
pub trait ToSubject {
    /// The subject rendition of this value.
    fn to_subject(&self) -> Value;
}

impl<T: Clone + Into<Value>> ToSubject for T {
    fn to_subject(&self) -> Value {
        self.clone().into()
    }
}

/// Equality-operator bridge: verdicts pass through, usage errors panic at the
/// assertion site.
pub(crate) fn eq_or_panic(matcher: &dyn Match, subject: &Value) -> bool {
    match matcher.try_matches(subject) {
        Ok(verdict) => verdict,
        Err(err) => {
            tracing::error!(matcher = %matcher, error = %err, "matcher usage error");
            panic!("{matcher}: {err}")
        }
    }
}

/// Outcome of the shared evaluation prelude.
pub(crate) enum Prelude<'a> {
    /// The evaluation is already decided.
    Verdict(bool),
    /// Continue evaluating against this (possibly transformed) subject.
    Continue(Cow<'a, Value>),
}

/// The steps every composite runs before its own constraints: apply the
/// pre-comparison transform with containment, then decide null subjects by
/// the `optional` flag alone, since null fails most structural checks with an
/// error rather than a clean mismatch.
pub(crate) fn prelude<'a>(
    map_before: &Option<MapFn>,
    optional: Option<bool>,
    subject: &'a Value,
) -> Prelude<'a> {
    let subject = match map_before {
        Some(transform) => match transform.apply(subject) {
            Some(mapped) => Cow::Owned(mapped),
            None => return Prelude::Verdict(false),
        },
        None => Cow::Borrowed(subject),
    };
    if matches!(*subject, Value::Null) {
        return Prelude::Verdict(optional.unwrap_or(false));
    }
    Prelude::Continue(subject)
}

/// Renders a matcher's engaged fields in declaration order as the
/// reconstructible constructor form, e.g. `Number(min=2, max=5)`.
pub(crate) struct Fields<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    wrote_any: bool,
    err: Option<fmt::Error>,
}

impl<'a, 'b> Fields<'a, 'b> {
    pub fn start(f: &'a mut fmt::Formatter<'b>, name: &str) -> Self {
        let err = write!(f, "{name}(").err();
        Self {
            f,
            wrote_any: false,
            err,
        }
    }

    fn write(&mut self, name: &str, value: &dyn fmt::Display) {
        if self.err.is_some() {
            return;
        }
        let sep = if self.wrote_any { ", " } else { "" };
        if let Err(err) = write!(self.f, "{sep}{name}={value}") {
            self.err = Some(err);
        }
        self.wrote_any = true;
    }

    /// Write the field if it is engaged.
    pub fn opt<T: fmt::Display>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.write(name, v);
        }
        self
    }

    /// Write a boolean flag only when set.
    pub fn flag(&mut self, name: &str, on: bool) -> &mut Self {
        if on {
            self.write(name, &true);
        }
        self
    }

    pub fn finish(&mut self) -> fmt::Result {
        if let Some(err) = self.err {
            return Err(err);
        }
        write!(self.f, ")")
    }
}

/// Wires a composite matcher into the assertion surface: equality against any
/// subject-convertible value (panicking on usage errors), the reverse
/// comparison from [`Value`], use as a nested [`Expected`] operand, and
/// `Debug` delegating to the reconstructible `Display` form.
macro_rules! impl_matcher_ops {
    ($ty:ty) => {
        impl<T: $crate::matcher::ToSubject> PartialEq<T> for $ty {
            fn eq(&self, other: &T) -> bool {
                $crate::matcher::eq_or_panic(self, &other.to_subject())
            }
        }

        impl PartialEq<$ty> for $crate::value::Value {
            fn eq(&self, matcher: &$ty) -> bool {
                matcher.eq(self)
            }
        }

        impl From<$ty> for $crate::expected::Expected {
            fn from(matcher: $ty) -> Self {
                $crate::expected::Expected::Matcher(std::sync::Arc::new(matcher))
            }
        }

        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(self, f)
            }
        }
    };
}

pub(crate) use impl_matcher_ops;
