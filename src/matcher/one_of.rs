//! Disjunctive combination of matchers and values.

use crate::error::MatchError;
use crate::expected::Expected;
use crate::matcher::{impl_matcher_ops, Fields, Match};
use crate::value::Value;
use std::fmt;

/// Matches iff the subject equals at least one of the configured options.
///
/// Options are tried left to right with short-circuit on the first success;
/// each may be a literal value or a nested matcher. An empty disjunction
/// matches nothing.
#[derive(Default, Clone)]
pub struct OneOf {
    options: Vec<Expected>,
}

impl OneOf {
    /// A disjunction with no options; never matches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a disjunction over the given options.
    pub fn of<T: Into<Expected>>(options: impl IntoIterator<Item = T>) -> Self {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Append one more option.
    pub fn or(mut self, option: impl Into<Expected>) -> Self {
        self.options.push(option.into());
        self
    }
}

impl Match for OneOf {
    fn try_matches(&self, subject: &Value) -> Result<bool, MatchError> {
        for option in &self.options {
            if option.matches_value(subject)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl fmt::Display for OneOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = Expected::List(self.options.clone());
        let mut fields = Fields::start(f, "OneOf");
        fields.opt("options", &Some(options));
        fields.finish()
    }
}

impl_matcher_ops!(OneOf);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::number::IntMatch;

    #[test]
    fn test_first_success_wins() {
        let matcher = OneOf::of([1, 2, 3]);
        assert!(matcher == 1);
        assert!(matcher == 2);
        assert!(!(matcher == 4));
    }

    #[test]
    fn test_empty_disjunction_never_matches() {
        let empty = OneOf::new();
        assert!(!(empty == 1));
        assert!(!(empty == Value::Null));
        assert!(!(empty == "anything"));
    }

    #[test]
    fn test_nested_matcher_options() {
        let matcher = OneOf::new().or("n/a").or(IntMatch::new().min(0));
        assert!(matcher == "n/a");
        assert!(matcher == 7);
        assert!(!(matcher == -1));
        assert!(!(matcher == "other"));
    }
}
