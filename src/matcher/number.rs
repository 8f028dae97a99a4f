//! Matchers for numeric subjects.

use crate::constraint::bounds::{check_close_to, Bounds, DEFAULT_CLOSE_TO_ERROR};
use crate::constraint::{MapFn, Predicate};
use crate::error::MatchError;
use crate::expected::Expected;
use crate::matcher::{impl_matcher_ops, prelude, Fields, Match, Prelude};
use crate::value::{Kind, Value};
use std::fmt;

macro_rules! numeric_builders {
    () => {
        /// Apply a transform to the subject before any other check runs; a
        /// failing transform makes the match false.
        pub fn map_before(
            mut self,
            f: impl Fn(&Value) -> anyhow::Result<Value> + Send + Sync + 'static,
        ) -> Self {
            self.map_before = Some(MapFn::new(f));
            self
        }

        /// Use a prebuilt transform, e.g. one of the [`crate::parse`] adapters.
        pub fn map_before_with(mut self, transform: MapFn) -> Self {
            self.map_before = Some(transform);
            self
        }

        /// Whether a null subject is accepted.
        pub fn optional(mut self, allowed: bool) -> Self {
            self.optional = Some(allowed);
            self
        }

        /// The subject must equal the operand exactly.
        pub fn equals(mut self, operand: impl Into<Expected>) -> Self {
            self.equals = Some(operand.into());
            self
        }

        /// The subject must be at least this (inclusive).
        pub fn min(mut self, bound: impl Into<Value>) -> Self {
            self.bounds.min = Some(bound.into());
            self
        }

        /// The subject must be at most this (inclusive).
        pub fn max(mut self, bound: impl Into<Value>) -> Self {
            self.bounds.max = Some(bound.into());
            self
        }

        /// The subject must be strictly greater than this.
        pub fn min_strict(mut self, bound: impl Into<Value>) -> Self {
            self.bounds.min_strict = Some(bound.into());
            self
        }

        /// The subject must be strictly less than this.
        pub fn max_strict(mut self, bound: impl Into<Value>) -> Self {
            self.bounds.max_strict = Some(bound.into());
            self
        }

        /// The subject must lie within a relative tolerance of the target;
        /// the default tolerance is `0.001` of the target magnitude, so a
        /// zero target only admits an exact match.
        pub fn close_to(mut self, target: impl Into<Value>) -> Self {
            self.close_to = Some(target.into());
            self
        }

        /// Override the relative tolerance used by `close_to`.
        pub fn error(mut self, fraction: f64) -> Self {
            self.error = Some(fraction);
            self
        }

        /// The subject must satisfy the predicate; a panicking predicate
        /// counts as a mismatch.
        pub fn satisfies(mut self, f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
            self.satisfies = Some(Predicate::new(f));
            self
        }

        fn check_numeric(&self, subject: &Value) -> Result<bool, MatchError> {
            if let Some(operand) = &self.equals {
                if !operand.matches_value(subject)? {
                    return Ok(false);
                }
            }
            if !self.bounds.check(subject) {
                return Ok(false);
            }
            if let Some(target) = &self.close_to {
                let error = self.error.unwrap_or(DEFAULT_CLOSE_TO_ERROR);
                if !check_close_to(target, error, subject) {
                    return Ok(false);
                }
            }
            if let Some(pred) = &self.satisfies {
                if !pred.check(subject) {
                    return Ok(false);
                }
            }
            Ok(true)
        }
    };
}

macro_rules! numeric_display {
    ($name:ident, $display:literal $(, $flag:ident)?) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut fields = Fields::start(f, $display);
                fields
                    .opt("map_before", &self.map_before)
                    .opt("optional", &self.optional)
                    .opt("equals", &self.equals);
                $(
                    fields
                        .opt("type", &self.$flag)
                        .opt("instance_of", &self.instance_of);
                )?
                fields
                    .opt("min", &self.bounds.min)
                    .opt("max", &self.bounds.max)
                    .opt("min_strict", &self.bounds.min_strict)
                    .opt("max_strict", &self.bounds.max_strict)
                    .opt("close_to", &self.close_to)
                    .opt("error", &self.error)
                    .opt("satisfies", &self.satisfies)
                    .finish()
            }
        }
    };
}

/// Matches any numeric subject, integer or float.
#[derive(Default, Clone)]
pub struct NumberMatch {
    map_before: Option<MapFn>,
    optional: Option<bool>,
    equals: Option<Expected>,
    type_is: Option<Kind>,
    instance_of: Option<Kind>,
    bounds: Bounds,
    close_to: Option<Value>,
    error: Option<f64>,
    satisfies: Option<Predicate>,
}

impl NumberMatch {
    /// A matcher accepting every numeric subject.
    pub fn new() -> Self {
        Self::default()
    }

    numeric_builders!();

    /// The subject's concrete kind must be exactly the given kind.
    pub fn type_is(mut self, kind: Kind) -> Self {
        self.type_is = Some(kind);
        self
    }

    /// The subject's kind must lie within the given kind.
    pub fn instance_of(mut self, kind: Kind) -> Self {
        self.instance_of = Some(kind);
        self
    }
}

impl Match for NumberMatch {
    fn try_matches(&self, subject: &Value) -> Result<bool, MatchError> {
        let subject = match prelude(&self.map_before, self.optional, subject) {
            Prelude::Verdict(verdict) => return Ok(verdict),
            Prelude::Continue(subject) => subject,
        };
        if !subject.kind().is_within(Kind::Number) {
            return Ok(false);
        }
        if let Some(kind) = self.type_is {
            if subject.kind() != kind {
                return Ok(false);
            }
        }
        if let Some(kind) = self.instance_of {
            if !subject.kind().is_within(kind) {
                return Ok(false);
            }
        }
        self.check_numeric(&subject)
    }
}

numeric_display!(NumberMatch, "Number", type_is);

impl_matcher_ops!(NumberMatch);

/// Matches integer subjects only.
#[derive(Default, Clone)]
pub struct IntMatch {
    map_before: Option<MapFn>,
    optional: Option<bool>,
    equals: Option<Expected>,
    bounds: Bounds,
    close_to: Option<Value>,
    error: Option<f64>,
    satisfies: Option<Predicate>,
}

impl IntMatch {
    /// A matcher accepting every integer.
    pub fn new() -> Self {
        Self::default()
    }

    numeric_builders!();
}

impl Match for IntMatch {
    fn try_matches(&self, subject: &Value) -> Result<bool, MatchError> {
        let subject = match prelude(&self.map_before, self.optional, subject) {
            Prelude::Verdict(verdict) => return Ok(verdict),
            Prelude::Continue(subject) => subject,
        };
        if subject.kind() != Kind::Int {
            return Ok(false);
        }
        self.check_numeric(&subject)
    }
}

numeric_display!(IntMatch, "Int");

impl_matcher_ops!(IntMatch);

/// Matches float subjects only.
#[derive(Default, Clone)]
pub struct FloatMatch {
    map_before: Option<MapFn>,
    optional: Option<bool>,
    equals: Option<Expected>,
    bounds: Bounds,
    close_to: Option<Value>,
    error: Option<f64>,
    satisfies: Option<Predicate>,
}

impl FloatMatch {
    /// A matcher accepting every float.
    pub fn new() -> Self {
        Self::default()
    }

    numeric_builders!();
}

impl Match for FloatMatch {
    fn try_matches(&self, subject: &Value) -> Result<bool, MatchError> {
        let subject = match prelude(&self.map_before, self.optional, subject) {
            Prelude::Verdict(verdict) => return Ok(verdict),
            Prelude::Continue(subject) => subject,
        };
        if subject.kind() != Kind::Float {
            return Ok(false);
        }
        self.check_numeric(&subject)
    }
}

numeric_display!(FloatMatch, "Float");

impl_matcher_ops!(FloatMatch);

/// Any numeric subject.
pub fn any_number() -> NumberMatch {
    NumberMatch::new()
}

/// Any integer subject.
pub fn any_int() -> IntMatch {
    IntMatch::new()
}

/// Any float subject.
pub fn any_float() -> FloatMatch {
    FloatMatch::new()
}

/// Any string parseable as a number (integer first, float fallback).
pub fn any_number_string() -> NumberMatch {
    NumberMatch::new().map_before_with(crate::parse::number_string())
}
