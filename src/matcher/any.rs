//! Matchers admitting any subject, any data value, or any kind tag.

use crate::constraint::{MapFn, Predicate};
use crate::error::MatchError;
use crate::expected::Expected;
use crate::matcher::{impl_matcher_ops, prelude, Fields, Match, Prelude};
use crate::value::{Kind, Value};
use std::fmt;

/// Matches any subject at all, including kind tags.
#[derive(Default, Clone)]
pub struct AnyMatch {
    map_before: Option<MapFn>,
    optional: Option<bool>,
    equals: Option<Expected>,
    vars: Option<Expected>,
    satisfies: Option<Predicate>,
}

impl AnyMatch {
    /// A matcher with no engaged constraints; matches everything.
    pub fn new() -> Self {
        Self::default()
    }

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

    /// The subject must equal the operand exactly; the operand may be a
    /// nested matcher.
    pub fn equals(mut self, operand: impl Into<Expected>) -> Self {
        self.equals = Some(operand.into());
        self
    }

    /// The subject's attribute mapping must equal the operand.
    pub fn vars(mut self, operand: impl Into<Expected>) -> Self {
        self.vars = Some(operand.into());
        self
    }

    /// The subject must satisfy the predicate; a panicking predicate counts
    /// as a mismatch.
    pub fn satisfies(mut self, f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.satisfies = Some(Predicate::new(f));
        self
    }
}

/// Shared tail of the any-family evaluation: equals, vars, then satisfies.
fn check_common(
    equals: &Option<Expected>,
    vars: &Option<Expected>,
    satisfies: &Option<Predicate>,
    subject: &Value,
) -> Result<bool, MatchError> {
    if let Some(operand) = equals {
        if !operand.matches_value(subject)? {
            return Ok(false);
        }
    }
    if let Some(operand) = vars {
        // only mappings expose an attribute view
        match subject {
            Value::Map(_) => {
                if !operand.matches_value(subject)? {
                    return Ok(false);
                }
            }
            _ => return Ok(false),
        }
    }
    if let Some(pred) = satisfies {
        if !pred.check(subject) {
            return Ok(false);
        }
    }
    Ok(true)
}

impl Match for AnyMatch {
    fn try_matches(&self, subject: &Value) -> Result<bool, MatchError> {
        let subject = match prelude(&self.map_before, self.optional, subject) {
            Prelude::Verdict(verdict) => return Ok(verdict),
            Prelude::Continue(subject) => subject,
        };
        check_common(&self.equals, &self.vars, &self.satisfies, &subject)
    }
}

impl fmt::Display for AnyMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::start(f, "Any")
            .opt("map_before", &self.map_before)
            .opt("optional", &self.optional)
            .opt("equals", &self.equals)
            .opt("vars", &self.vars)
            .opt("satisfies", &self.satisfies)
            .finish()
    }
}

impl_matcher_ops!(AnyMatch);

/// Matches any data value: everything except kind tags, which stand in for
/// code objects rather than data.
#[derive(Default, Clone)]
pub struct ValueMatch {
    map_before: Option<MapFn>,
    optional: Option<bool>,
    equals: Option<Expected>,
    type_is: Option<Kind>,
    instance_of: Option<Kind>,
    vars: Option<Expected>,
    satisfies: Option<Predicate>,
}

impl ValueMatch {
    /// A matcher accepting every data value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a transform to the subject before any other check runs.
    pub fn map_before(
        mut self,
        f: impl Fn(&Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.map_before = Some(MapFn::new(f));
        self
    }

    /// Use a prebuilt transform.
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

    /// The subject's attribute mapping must equal the operand.
    pub fn vars(mut self, operand: impl Into<Expected>) -> Self {
        self.vars = Some(operand.into());
        self
    }

    /// The subject must satisfy the predicate.
    pub fn satisfies(mut self, f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.satisfies = Some(Predicate::new(f));
        self
    }
}

impl Match for ValueMatch {
    fn try_matches(&self, subject: &Value) -> Result<bool, MatchError> {
        let subject = match prelude(&self.map_before, self.optional, subject) {
            Prelude::Verdict(verdict) => return Ok(verdict),
            Prelude::Continue(subject) => subject,
        };
        if matches!(*subject, Value::Kind(_)) {
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
        check_common(&self.equals, &self.vars, &self.satisfies, &subject)
    }
}

impl fmt::Display for ValueMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::start(f, "AnyValue")
            .opt("map_before", &self.map_before)
            .opt("optional", &self.optional)
            .opt("equals", &self.equals)
            .opt("type", &self.type_is)
            .opt("instance_of", &self.instance_of)
            .opt("vars", &self.vars)
            .opt("satisfies", &self.satisfies)
            .finish()
    }
}

impl_matcher_ops!(ValueMatch);

/// Matches kind tags only, with directional lattice checks.
#[derive(Default, Clone)]
pub struct TypeMatch {
    map_before: Option<MapFn>,
    optional: Option<bool>,
    equals: Option<Expected>,
    subclass_of: Option<Kind>,
    superclass_of: Option<Kind>,
    satisfies: Option<Predicate>,
}

impl TypeMatch {
    /// A matcher accepting every kind tag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a transform to the subject before any other check runs.
    pub fn map_before(
        mut self,
        f: impl Fn(&Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.map_before = Some(MapFn::new(f));
        self
    }

    /// Use a prebuilt transform.
    pub fn map_before_with(mut self, transform: MapFn) -> Self {
        self.map_before = Some(transform);
        self
    }

    /// Whether a null subject is accepted.
    pub fn optional(mut self, allowed: bool) -> Self {
        self.optional = Some(allowed);
        self
    }

    /// The subject kind must equal the operand exactly.
    pub fn equals(mut self, operand: impl Into<Expected>) -> Self {
        self.equals = Some(operand.into());
        self
    }

    /// The subject kind must be a descendant of the given kind (inclusive).
    pub fn subclass_of(mut self, kind: Kind) -> Self {
        self.subclass_of = Some(kind);
        self
    }

    /// The subject kind must be an ancestor of the given kind (inclusive).
    pub fn superclass_of(mut self, kind: Kind) -> Self {
        self.superclass_of = Some(kind);
        self
    }

    /// The subject must satisfy the predicate.
    pub fn satisfies(mut self, f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.satisfies = Some(Predicate::new(f));
        self
    }
}

impl Match for TypeMatch {
    fn try_matches(&self, subject: &Value) -> Result<bool, MatchError> {
        let subject = match prelude(&self.map_before, self.optional, subject) {
            Prelude::Verdict(verdict) => return Ok(verdict),
            Prelude::Continue(subject) => subject,
        };
        let Value::Kind(kind) = *subject else {
            return Ok(false);
        };
        if let Some(operand) = &self.equals {
            if !operand.matches_value(&subject)? {
                return Ok(false);
            }
        }
        if let Some(ancestor) = self.subclass_of {
            if !kind.is_within(ancestor) {
                return Ok(false);
            }
        }
        if let Some(descendant) = self.superclass_of {
            if !descendant.is_within(kind) {
                return Ok(false);
            }
        }
        if let Some(pred) = &self.satisfies {
            if !pred.check(&subject) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl fmt::Display for TypeMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::start(f, "AnyType")
            .opt("map_before", &self.map_before)
            .opt("optional", &self.optional)
            .opt("equals", &self.equals)
            .opt("subclass_of", &self.subclass_of)
            .opt("superclass_of", &self.superclass_of)
            .opt("satisfies", &self.satisfies)
            .finish()
    }
}

impl_matcher_ops!(TypeMatch);

/// Any subject at all.
pub fn any() -> AnyMatch {
    AnyMatch::new()
}

/// Any data value (kind tags excluded).
pub fn any_value() -> ValueMatch {
    ValueMatch::new()
}

/// Any kind tag.
pub fn any_type() -> TypeMatch {
    TypeMatch::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_accepts_everything() {
        assert!(any() == 1);
        assert!(any() == "abc");
        assert!(any() == Value::List(vec![]));
        assert!(any() == Kind::Int);
    }

    #[test]
    fn test_any_rejects_null_unless_optional() {
        assert!(!(any() == Value::Null));
        assert!(any().optional(true) == Value::Null);
    }

    #[test]
    fn test_any_map_before_and_equals() {
        let incremented = any().equals(2).map_before(|v| match v {
            Value::Int(i) => Ok(Value::Int(i + 1)),
            _ => anyhow::bail!("not an int"),
        });
        assert!(incremented == 1);
        assert!(!(any().equals(2) == 1));
    }

    #[test]
    fn test_any_predicate() {
        let even = any().satisfies(|v| matches!(v, Value::Int(i) if i % 2 == 0));
        assert!(even == 2);
        assert!(!(even == 1));
    }

    #[test]
    fn test_value_match_excludes_kind_tags() {
        assert!(any_value() == 1);
        assert!(any_value() == "abc");
        assert!(!(any_value() == Kind::Int));
    }

    #[test]
    fn test_type_match_admission_and_lattice() {
        assert!(!(any_type() == 1));
        assert!(any_type() == Kind::Int);
        assert!(any_type().subclass_of(Kind::Collection) == Kind::List);
        assert!(!(any_type().superclass_of(Kind::Collection) == Kind::List));
        assert!(any_type().superclass_of(Kind::List) == Kind::Collection);
        assert!(any_type().subclass_of(Kind::List) == Kind::List);
    }

    #[test]
    fn test_vars_requires_mapping_subject() {
        let matcher = any().vars(crate::expected::map_of([("a", 1)]));
        assert!(matcher == Value::map([(Value::from("a"), Value::Int(1))]));
        assert!(!(matcher == 5));
    }

    #[test]
    fn test_display_lists_engaged_fields_in_order() {
        let matcher = any().optional(true).equals(2);
        assert_eq!(matcher.to_string(), "Any(optional=true, equals=2)");
        assert_eq!(any().to_string(), "Any()");
    }
}
