//! Matchers for container subjects: generic collections, lists, tuples, sets
//! and maps.

use crate::constraint::contains::{multiset_matches, ContainSpec};
use crate::constraint::elements::ElementsSpec;
use crate::constraint::length::LengthSpec;
use crate::constraint::{MapFn, Predicate};
use crate::error::MatchError;
use crate::expected::Expected;
use crate::matcher::{impl_matcher_ops, prelude, Fields, Match, Prelude};
use crate::value::{Kind, Value};
use std::fmt;

/// Evaluate the structural tail shared by the sequence matchers: length,
/// containment, element-wise all/any, then the predicate last.
fn check_structure(
    length: &LengthSpec,
    contains: &ContainSpec,
    elements: &ElementsSpec,
    satisfies: &Option<Predicate>,
    subject: &Value,
) -> Result<bool, MatchError> {
    if length.engaged() {
        match subject.size() {
            Some(size) if length.check(size) => {}
            _ => return Ok(false),
        }
    }
    if !contains.check(subject)? {
        return Ok(false);
    }
    if elements.all.is_some() || elements.any.is_some() {
        let Some(members) = subject.elements() else {
            return Ok(false);
        };
        if !elements.check(&members)? {
            return Ok(false);
        }
    }
    if let Some(pred) = satisfies {
        if !pred.check(subject) {
            return Ok(false);
        }
    }
    Ok(true)
}

macro_rules! sequence_builders {
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

        /// The subject must equal the operand exactly; the operand may nest
        /// matchers per element.
        pub fn equals(mut self, operand: impl Into<Expected>) -> Self {
            self.equals = Some(operand.into());
            self
        }

        /// The subject size must be exactly this.
        pub fn length(mut self, length: usize) -> Self {
            self.length.length = Some(length);
            self
        }

        /// The subject size must be at least this.
        pub fn min_length(mut self, min: usize) -> Self {
            self.length.min_length = Some(min);
            self
        }

        /// The subject size must be at most this.
        pub fn max_length(mut self, max: usize) -> Self {
            self.length.max_length = Some(max);
            self
        }

        /// The subject must have at least one member.
        pub fn non_empty(mut self, required: bool) -> Self {
            self.length.non_empty = required;
            self
        }

        /// Every subject member must be present in the operand.
        pub fn subset_of(mut self, operand: impl Into<Expected>) -> Self {
            self.contains.subset_of = Some(operand.into());
            self
        }

        /// Every operand member must be present in the subject.
        pub fn superset_of(mut self, operand: impl Into<Expected>) -> Self {
            self.contains.superset_of = Some(operand.into());
            self
        }

        /// The subject must satisfy the predicate; a panicking predicate
        /// counts as a mismatch.
        pub fn satisfies(mut self, f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
            self.satisfies = Some(Predicate::new(f));
            self
        }
    };
}

macro_rules! element_builders {
    () => {
        /// Every subject member must equal the operand.
        pub fn all(mut self, operand: impl Into<Expected>) -> Self {
            self.elements.all = Some(operand.into());
            self
        }

        /// At least one subject member must equal the operand.
        pub fn any(mut self, operand: impl Into<Expected>) -> Self {
            self.elements.any = Some(operand.into());
            self
        }
    };
}

/// Matches any subject of a collection kind: text, byte strings, sequences,
/// sets and maps.
#[derive(Default, Clone)]
pub struct CollectionMatch {
    map_before: Option<MapFn>,
    optional: Option<bool>,
    equals: Option<Expected>,
    type_is: Option<Kind>,
    instance_of: Option<Kind>,
    length: LengthSpec,
    contains: ContainSpec,
    elements: ElementsSpec,
    satisfies: Option<Predicate>,
}

impl CollectionMatch {
    /// A matcher accepting every collection subject.
    pub fn new() -> Self {
        Self::default()
    }

    sequence_builders!();
    element_builders!();

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

impl Match for CollectionMatch {
    fn try_matches(&self, subject: &Value) -> Result<bool, MatchError> {
        let subject = match prelude(&self.map_before, self.optional, subject) {
            Prelude::Verdict(verdict) => return Ok(verdict),
            Prelude::Continue(subject) => subject,
        };
        if !subject.kind().is_within(Kind::Collection) {
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
        if let Some(operand) = &self.equals {
            if !operand.matches_value(&subject)? {
                return Ok(false);
            }
        }
        check_structure(
            &self.length,
            &self.contains,
            &self.elements,
            &self.satisfies,
            &subject,
        )
    }
}

impl fmt::Display for CollectionMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::start(f, "Collection")
            .opt("map_before", &self.map_before)
            .opt("optional", &self.optional)
            .opt("equals", &self.equals)
            .opt("type", &self.type_is)
            .opt("instance_of", &self.instance_of)
            .opt("length", &self.length.length)
            .opt("min_length", &self.length.min_length)
            .opt("max_length", &self.length.max_length)
            .flag("non_empty", self.length.non_empty)
            .opt("subset_of", &self.contains.subset_of)
            .opt("superset_of", &self.contains.superset_of)
            .opt("all", &self.elements.all)
            .opt("any", &self.elements.any)
            .opt("satisfies", &self.satisfies)
            .finish()
    }
}

impl_matcher_ops!(CollectionMatch);

macro_rules! sequence_matcher {
    ($(#[$docs:meta])* $name:ident, $display:literal, $kind:ident) => {
        $(#[$docs])*
        #[derive(Default, Clone)]
        pub struct $name {
            map_before: Option<MapFn>,
            optional: Option<bool>,
            equals: Option<Expected>,
            length: LengthSpec,
            contains: ContainSpec,
            elements: ElementsSpec,
            satisfies: Option<Predicate>,
        }

        impl $name {
            /// A matcher with no engaged constraints beyond the kind check.
            pub fn new() -> Self {
                Self::default()
            }

            sequence_builders!();
            element_builders!();
        }

        impl Match for $name {
            fn try_matches(&self, subject: &Value) -> Result<bool, MatchError> {
                let subject = match prelude(&self.map_before, self.optional, subject) {
                    Prelude::Verdict(verdict) => return Ok(verdict),
                    Prelude::Continue(subject) => subject,
                };
                if subject.kind() != Kind::$kind {
                    return Ok(false);
                }
                if let Some(operand) = &self.equals {
                    if !operand.matches_value(&subject)? {
                        return Ok(false);
                    }
                }
                check_structure(
                    &self.length,
                    &self.contains,
                    &self.elements,
                    &self.satisfies,
                    &subject,
                )
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Fields::start(f, $display)
                    .opt("map_before", &self.map_before)
                    .opt("optional", &self.optional)
                    .opt("equals", &self.equals)
                    .opt("length", &self.length.length)
                    .opt("min_length", &self.length.min_length)
                    .opt("max_length", &self.length.max_length)
                    .flag("non_empty", self.length.non_empty)
                    .opt("subset_of", &self.contains.subset_of)
                    .opt("superset_of", &self.contains.superset_of)
                    .opt("all", &self.elements.all)
                    .opt("any", &self.elements.any)
                    .opt("satisfies", &self.satisfies)
                    .finish()
            }
        }

        impl_matcher_ops!($name);
    };
}

sequence_matcher!(
    /// Matches tuple subjects.
    TupleMatch,
    "Tuple",
    Tuple
);

sequence_matcher!(
    /// Matches set subjects.
    SetMatch,
    "Set",
    Set
);

/// Matches list subjects, optionally comparing `equals` as a multiset.
#[derive(Default, Clone)]
pub struct ListMatch {
    map_before: Option<MapFn>,
    optional: Option<bool>,
    equals: Option<Expected>,
    ignore_order: bool,
    length: LengthSpec,
    contains: ContainSpec,
    elements: ElementsSpec,
    satisfies: Option<Predicate>,
}

impl ListMatch {
    /// A matcher accepting every list.
    pub fn new() -> Self {
        Self::default()
    }

    sequence_builders!();
    element_builders!();

    /// Compare `equals` ignoring element order: the subject must be a
    /// permutation (multiset-equal rearrangement) of the operand.
    pub fn ignore_order(mut self, ignore: bool) -> Self {
        self.ignore_order = ignore;
        self
    }
}

impl Match for ListMatch {
    fn try_matches(&self, subject: &Value) -> Result<bool, MatchError> {
        let subject = match prelude(&self.map_before, self.optional, subject) {
            Prelude::Verdict(verdict) => return Ok(verdict),
            Prelude::Continue(subject) => subject,
        };
        let Value::List(members) = subject.as_ref() else {
            return Ok(false);
        };
        if let Some(operand) = &self.equals {
            let equal = match (self.ignore_order, operand.as_items()) {
                (true, Some(items)) => multiset_matches(&items, members)?,
                _ => operand.matches_value(&subject)?,
            };
            if !equal {
                return Ok(false);
            }
        }
        check_structure(
            &self.length,
            &self.contains,
            &self.elements,
            &self.satisfies,
            &subject,
        )
    }
}

impl fmt::Display for ListMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::start(f, "List")
            .opt("map_before", &self.map_before)
            .opt("optional", &self.optional)
            .opt("equals", &self.equals)
            .flag("ignore_order", self.ignore_order)
            .opt("length", &self.length.length)
            .opt("min_length", &self.length.min_length)
            .opt("max_length", &self.length.max_length)
            .flag("non_empty", self.length.non_empty)
            .opt("subset_of", &self.contains.subset_of)
            .opt("superset_of", &self.contains.superset_of)
            .opt("all", &self.elements.all)
            .opt("any", &self.elements.any)
            .opt("satisfies", &self.satisfies)
            .finish()
    }
}

impl_matcher_ops!(ListMatch);

/// Matches mapping subjects, with key-set and value-multiset constraints on
/// top of the shared structural ones.
#[derive(Default, Clone)]
pub struct DictMatch {
    map_before: Option<MapFn>,
    optional: Option<bool>,
    equals: Option<Expected>,
    length: LengthSpec,
    contains: ContainSpec,
    keys: Option<Expected>,
    values: Option<Expected>,
    keys_all: Option<Expected>,
    keys_any: Option<Expected>,
    values_all: Option<Expected>,
    values_any: Option<Expected>,
    satisfies: Option<Predicate>,
}

impl DictMatch {
    /// A matcher accepting every mapping.
    pub fn new() -> Self {
        Self::default()
    }

    sequence_builders!();

    /// The subject's key set must equal the operand (order-insensitive).
    pub fn keys(mut self, operand: impl Into<Expected>) -> Self {
        self.keys = Some(operand.into());
        self
    }

    /// The subject's values must equal the operand as a multiset.
    pub fn values(mut self, operand: impl Into<Expected>) -> Self {
        self.values = Some(operand.into());
        self
    }

    /// Every key must equal the operand.
    pub fn keys_all(mut self, operand: impl Into<Expected>) -> Self {
        self.keys_all = Some(operand.into());
        self
    }

    /// At least one key must equal the operand.
    pub fn keys_any(mut self, operand: impl Into<Expected>) -> Self {
        self.keys_any = Some(operand.into());
        self
    }

    /// Every value must equal the operand.
    pub fn values_all(mut self, operand: impl Into<Expected>) -> Self {
        self.values_all = Some(operand.into());
        self
    }

    /// At least one value must equal the operand.
    pub fn values_any(mut self, operand: impl Into<Expected>) -> Self {
        self.values_any = Some(operand.into());
        self
    }
}

/// Order-insensitive comparison of a key or value projection against an
/// operand: collection operands compare as multisets, matcher operands see
/// the projection as a set value.
fn projection_equals(operand: &Expected, projection: &[Value]) -> Result<bool, MatchError> {
    match operand.as_items() {
        Some(items) => multiset_matches(&items, projection),
        None => operand.matches_value(&Value::Set(projection.to_vec())),
    }
}

impl Match for DictMatch {
    fn try_matches(&self, subject: &Value) -> Result<bool, MatchError> {
        let subject = match prelude(&self.map_before, self.optional, subject) {
            Prelude::Verdict(verdict) => return Ok(verdict),
            Prelude::Continue(subject) => subject,
        };
        let Value::Map(entries) = subject.as_ref() else {
            return Ok(false);
        };
        if let Some(operand) = &self.equals {
            if !operand.matches_value(&subject)? {
                return Ok(false);
            }
        }
        if self.length.engaged() && !self.length.check(entries.len()) {
            return Ok(false);
        }
        let keys: Vec<Value> = entries.iter().map(|(k, _)| k.clone()).collect();
        let values: Vec<Value> = entries.iter().map(|(_, v)| v.clone()).collect();
        if let Some(operand) = &self.keys {
            if !projection_equals(operand, &keys)? {
                return Ok(false);
            }
        }
        if let Some(operand) = &self.values {
            if !projection_equals(operand, &values)? {
                return Ok(false);
            }
        }
        if !self.contains.check(&subject)? {
            return Ok(false);
        }
        let key_spec = ElementsSpec {
            all: self.keys_all.clone(),
            any: self.keys_any.clone(),
        };
        if !key_spec.check(&keys)? {
            return Ok(false);
        }
        let value_spec = ElementsSpec {
            all: self.values_all.clone(),
            any: self.values_any.clone(),
        };
        if !value_spec.check(&values)? {
            return Ok(false);
        }
        if let Some(pred) = &self.satisfies {
            if !pred.check(&subject) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl fmt::Display for DictMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::start(f, "Dict")
            .opt("map_before", &self.map_before)
            .opt("optional", &self.optional)
            .opt("equals", &self.equals)
            .opt("length", &self.length.length)
            .opt("min_length", &self.length.min_length)
            .opt("max_length", &self.length.max_length)
            .flag("non_empty", self.length.non_empty)
            .opt("subset_of", &self.contains.subset_of)
            .opt("superset_of", &self.contains.superset_of)
            .opt("keys", &self.keys)
            .opt("values", &self.values)
            .opt("keys_all", &self.keys_all)
            .opt("keys_any", &self.keys_any)
            .opt("values_all", &self.values_all)
            .opt("values_any", &self.values_any)
            .opt("satisfies", &self.satisfies)
            .finish()
    }
}

impl_matcher_ops!(DictMatch);

/// Any collection subject.
pub fn any_collection() -> CollectionMatch {
    CollectionMatch::new()
}

/// Any collection with at least one member.
pub fn any_nonempty_collection() -> CollectionMatch {
    CollectionMatch::new().non_empty(true)
}

/// Any list.
pub fn any_list() -> ListMatch {
    ListMatch::new()
}

/// Any list with at least one element.
pub fn any_nonempty_list() -> ListMatch {
    ListMatch::new().non_empty(true)
}

/// Any tuple.
pub fn any_tuple() -> TupleMatch {
    TupleMatch::new()
}

/// Any tuple with at least one element.
pub fn any_nonempty_tuple() -> TupleMatch {
    TupleMatch::new().non_empty(true)
}

/// Any set.
pub fn any_set() -> SetMatch {
    SetMatch::new()
}

/// Any set with at least one element.
pub fn any_nonempty_set() -> SetMatch {
    SetMatch::new().non_empty(true)
}

/// Any mapping.
pub fn any_dict() -> DictMatch {
    DictMatch::new()
}

/// Any mapping with at least one entry.
pub fn any_nonempty_dict() -> DictMatch {
    DictMatch::new().non_empty(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_admission() {
        assert!(any_collection() == vec![1, 2]);
        assert!(any_collection() == "abc");
        assert!(any_collection() == Value::map([(Value::from("a"), Value::Int(1))]));
        assert!(!(any_collection() == 1));
    }

    #[test]
    fn test_collection_type_narrowing() {
        assert!(any_collection().type_is(Kind::List) == vec![1]);
        assert!(!(any_collection().type_is(Kind::List) == Value::tuple([Value::Int(1)])));
        assert!(any_collection().instance_of(Kind::Collection) == "abc");
    }

    #[test]
    fn test_list_equals_with_ignore_order() {
        let matcher = ListMatch::new().equals(vec![1, 2, 3]).ignore_order(true);
        assert!(matcher == vec![3, 2, 1]);
        assert!(!(matcher == vec![3, 2, 2]));

        let ordered = ListMatch::new().equals(vec![1, 2, 3]);
        assert!(!(ordered == vec![3, 2, 1]));
        assert!(ordered == vec![1, 2, 3]);
    }

    #[test]
    fn test_list_nested_matcher_elements() {
        let matcher = ListMatch::new().all(crate::matcher::number::IntMatch::new().min(0));
        assert!(matcher == vec![0, 1, 2]);
        assert!(!(matcher == vec![0, -1]));
    }

    #[test]
    fn test_dict_projections() {
        let subject = Value::map([
            (Value::Int(1), Value::from("a")),
            (Value::Int(2), Value::from("b")),
        ]);
        assert!(any_dict().keys(Value::set([Value::Int(2), Value::Int(1)])) == subject);
        assert!(!(any_dict().keys(Value::set([Value::Int(1)])) == subject));
        assert!(any_dict().values(vec!["b", "a"]) == subject);
        assert!(any_dict().keys_any(2) == subject);
        assert!(!(any_dict().keys_any(5) == subject));
        assert!(any_dict().values_all(any_collection()) == subject);
    }

    #[test]
    fn test_set_multiset_equality() {
        let matcher = SetMatch::new().equals(Value::set([Value::Int(1), Value::Int(2)]));
        assert!(matcher == Value::set([Value::Int(2), Value::Int(1)]));
        assert!(!(matcher == Value::from(vec![1, 2])));
    }

    #[test]
    fn test_display() {
        let matcher = ListMatch::new().equals(vec![1, 2]).ignore_order(true).length(2);
        assert_eq!(
            matcher.to_string(),
            "List(equals=[1, 2], ignore_order=true, length=2)"
        );
    }
}
