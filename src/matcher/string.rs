//! Matchers for text subjects.
//!
//! Text is itself a sequence, so string matchers layer prefix, suffix and
//! regex constraints on top of the generic collection constraints (length,
//! containment). The `ignore_case` flag propagates to the regex source, the
//! prefix and the suffix checks alike.

use crate::constraint::contains::ContainSpec;
use crate::constraint::length::LengthSpec;
use crate::constraint::{MapFn, Predicate};
use crate::error::MatchError;
use crate::expected::Expected;
use crate::matcher::{impl_matcher_ops, prelude, Fields, Match, Prelude};
use crate::value::Value;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::fmt;

static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("invalid uuid regex")
});

static ALPHANUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-zA-Z0-9]+$").expect("invalid alphanumeric regex"));

/// A regex constraint: either a source string compiled at evaluation time
/// (full-match semantics, `ignore_case` honoured) or a precompiled pattern
/// used verbatim, carrying its own anchors and flags.
#[derive(Debug, Clone)]
enum StringPattern {
    Source(String),
    Compiled(Regex),
}

impl fmt::Display for StringPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringPattern::Source(src) => write!(f, "{src:?}"),
            StringPattern::Compiled(re) => write!(f, "{:?}", re.as_str()),
        }
    }
}

/// Matches text subjects (strings and byte strings).
#[derive(Default, Clone)]
pub struct StringMatch {
    map_before: Option<MapFn>,
    optional: Option<bool>,
    equals: Option<Expected>,
    length: LengthSpec,
    contains: ContainSpec,
    starts_with: Option<String>,
    ends_with: Option<String>,
    regex: Option<StringPattern>,
    ignore_case: bool,
    satisfies: Option<Predicate>,
}

impl StringMatch {
    /// A matcher accepting every text subject.
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

    /// The subject must equal the operand exactly.
    pub fn equals(mut self, operand: impl Into<Expected>) -> Self {
        self.equals = Some(operand.into());
        self
    }

    /// The subject character count must be exactly this.
    pub fn length(mut self, length: usize) -> Self {
        self.length.length = Some(length);
        self
    }

    /// The subject character count must be at least this.
    pub fn min_length(mut self, min: usize) -> Self {
        self.length.min_length = Some(min);
        self
    }

    /// The subject character count must be at most this.
    pub fn max_length(mut self, max: usize) -> Self {
        self.length.max_length = Some(max);
        self
    }

    /// The subject must not be empty.
    pub fn non_empty(mut self, required: bool) -> Self {
        self.length.non_empty = required;
        self
    }

    /// Every subject character must be present in the operand.
    pub fn subset_of(mut self, operand: impl Into<Expected>) -> Self {
        self.contains.subset_of = Some(operand.into());
        self
    }

    /// Every operand character must be present in the subject.
    pub fn superset_of(mut self, operand: impl Into<Expected>) -> Self {
        self.contains.superset_of = Some(operand.into());
        self
    }

    /// The subject must start with the given prefix.
    pub fn starts_with(mut self, prefix: impl Into<String>) -> Self {
        self.starts_with = Some(prefix.into());
        self
    }

    /// The subject must end with the given suffix.
    pub fn ends_with(mut self, suffix: impl Into<String>) -> Self {
        self.ends_with = Some(suffix.into());
        self
    }

    /// The whole subject must match the regex source; compiled lazily at
    /// evaluation, where an invalid source is a usage error.
    pub fn regex(mut self, source: impl Into<String>) -> Self {
        self.regex = Some(StringPattern::Source(source.into()));
        self
    }

    /// Match against a precompiled regex, used verbatim: supply anchors and
    /// flags inside the pattern itself.
    pub fn regex_compiled(mut self, pattern: Regex) -> Self {
        self.regex = Some(StringPattern::Compiled(pattern));
        self
    }

    /// Case-insensitive matching for the regex source, prefix and suffix
    /// constraints.
    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    /// The subject must satisfy the predicate; a panicking predicate counts
    /// as a mismatch.
    pub fn satisfies(mut self, f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.satisfies = Some(Predicate::new(f));
        self
    }

    fn affix_matches(&self, text: &str) -> bool {
        if let Some(prefix) = &self.starts_with {
            let ok = if self.ignore_case {
                text.to_lowercase().starts_with(&prefix.to_lowercase())
            } else {
                text.starts_with(prefix.as_str())
            };
            if !ok {
                return false;
            }
        }
        if let Some(suffix) = &self.ends_with {
            let ok = if self.ignore_case {
                text.to_lowercase().ends_with(&suffix.to_lowercase())
            } else {
                text.ends_with(suffix.as_str())
            };
            if !ok {
                return false;
            }
        }
        true
    }

    fn regex_matches(&self, text: &str) -> Result<bool, MatchError> {
        match &self.regex {
            None => Ok(true),
            Some(StringPattern::Source(source)) => {
                let re = RegexBuilder::new(&format!("^(?:{source})$"))
                    .case_insensitive(self.ignore_case)
                    .build()?;
                Ok(re.is_match(text))
            }
            Some(StringPattern::Compiled(re)) => Ok(re.is_match(text)),
        }
    }
}

impl Match for StringMatch {
    fn try_matches(&self, subject: &Value) -> Result<bool, MatchError> {
        let subject = match prelude(&self.map_before, self.optional, subject) {
            Prelude::Verdict(verdict) => return Ok(verdict),
            Prelude::Continue(subject) => subject,
        };
        let text: Cow<'_, str> = match subject.as_ref() {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Bytes(b) => String::from_utf8_lossy(b),
            _ => return Ok(false),
        };
        if let Some(operand) = &self.equals {
            if !operand.matches_value(&subject)? {
                return Ok(false);
            }
        }
        if self.length.engaged() && !self.length.check(text.chars().count()) {
            return Ok(false);
        }
        if !self.contains.check(&subject)? {
            return Ok(false);
        }
        if !self.affix_matches(&text) {
            return Ok(false);
        }
        if !self.regex_matches(&text)? {
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

impl fmt::Display for StringMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let starts = self.starts_with.as_ref().map(|s| format!("{s:?}"));
        let ends = self.ends_with.as_ref().map(|s| format!("{s:?}"));
        Fields::start(f, "String")
            .opt("map_before", &self.map_before)
            .opt("optional", &self.optional)
            .opt("equals", &self.equals)
            .opt("length", &self.length.length)
            .opt("min_length", &self.length.min_length)
            .opt("max_length", &self.length.max_length)
            .flag("non_empty", self.length.non_empty)
            .opt("subset_of", &self.contains.subset_of)
            .opt("superset_of", &self.contains.superset_of)
            .opt("starts_with", &starts)
            .opt("ends_with", &ends)
            .opt("regex", &self.regex)
            .flag("ignore_case", self.ignore_case)
            .opt("satisfies", &self.satisfies)
            .finish()
    }
}

impl_matcher_ops!(StringMatch);

/// Any text subject.
pub fn any_string() -> StringMatch {
    StringMatch::new()
}

/// Any text subject with at least one character.
pub fn any_nonempty_string() -> StringMatch {
    StringMatch::new().non_empty(true)
}

/// Any text consisting of one or more ASCII letters and digits.
pub fn any_alphanumeric_string() -> StringMatch {
    StringMatch::new().regex_compiled(ALPHANUMERIC_RE.clone())
}

/// Any lowercase hex UUID string.
pub fn any_uuid() -> StringMatch {
    StringMatch::new().regex_compiled(UUID_RE.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admission() {
        assert!(any_string() == "abc");
        assert!(any_string() == Value::bytes(*b"abc"));
        assert!(!(any_string() == 1));
    }

    #[test]
    fn test_regex_fullmatch() {
        assert!(any_string().regex("abc") == "abc");
        assert!(!(any_string().regex("abc") == "abcd"));
        assert!(!(any_string().regex("def") == "abc"));
    }

    #[test]
    fn test_regex_ignore_case() {
        assert!(!(any_string().regex("ABC") == "abc"));
        assert!(any_string().regex("ABC").ignore_case(true) == "abc");
    }

    #[test]
    fn test_regex_compiled_is_verbatim() {
        let re = Regex::new("^a.c$").unwrap();
        assert!(any_string().regex_compiled(re.clone()) == "abc");
        assert!(!(any_string().regex_compiled(re) == "xabc"));
    }

    #[test]
    fn test_invalid_regex_is_a_usage_error() {
        let matcher = any_string().regex("(unclosed");
        assert!(matcher.try_matches(&Value::from("abc")).is_err());
    }

    #[test]
    fn test_affixes_honour_ignore_case() {
        assert!(any_string().starts_with("ab") == "abc");
        assert!(!(any_string().starts_with("AB") == "abc"));
        assert!(any_string().starts_with("AB").ignore_case(true) == "abc");
        assert!(any_string().ends_with("bc") == "abc");
        assert!(any_string().ends_with("BC").ignore_case(true) == "abc");
        assert!(!(any_string().ends_with("ab") == "abc"));
    }

    #[test]
    fn test_length_counts_chars() {
        assert!(any_string().length(3) == "abc");
        assert!(any_string().length(3) == "äöü");
        assert!(!(any_string().length(2) == "abc"));
    }

    #[test]
    fn test_uuid_preset() {
        assert!(any_uuid() == "123e4567-e89b-12d3-a456-426614174000");
        assert!(!(any_uuid() == "not-a-uuid"));
    }

    #[test]
    fn test_alphanumeric_preset() {
        assert!(any_alphanumeric_string() == "abc123");
        assert!(!(any_alphanumeric_string() == "abc 123"));
        assert!(!(any_alphanumeric_string() == ""));
    }
}
