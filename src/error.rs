//! Usage-error types surfaced by matcher evaluation.
//!
//! Constraint mismatches are reported as a `false` verdict and failures raised
//! by user-supplied callables are contained at the constraint that invoked
//! them. Everything in this module is a *usage error*: a matcher configuration
//! or call that has no meaningful pass/fail interpretation and must reach the
//! caller instead of being folded into a verdict.

use crate::value::Kind;
use thiserror::Error;

/// Errors raised by matcher evaluation for unusable configurations or subjects.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A timezone-aware matcher was compared against a naive datetime subject.
    #[error("timezone-aware matcher compared against a naive datetime subject")]
    NaiveSubject,

    /// A bound on a timezone-aware matcher is missing timezone information.
    #[error("bound `{field}` of a timezone-aware matcher is missing timezone information")]
    NaiveBound {
        /// Name of the offending bound field
        field: &'static str,
    },

    /// Subject and bound are of temporal kinds that cannot be coerced for comparison.
    #[error("cannot compare a {subject} subject against a {bound} bound")]
    TemporalKindMismatch {
        /// Kind of the subject under test
        subject: Kind,
        /// Description of the configured bound
        bound: &'static str,
    },

    /// A regex source failed to compile at evaluation time.
    #[error("invalid regex: {0}")]
    Regex(#[from] regex::Error),

    /// A string-parsing helper received a non-text value.
    #[error("expected a string subject, got {kind}")]
    SubjectNotText {
        /// Kind of the value that was supplied instead
        kind: Kind,
    },

    /// Input could not be parsed as an ISO-8601 date, time, or datetime.
    #[error("cannot parse {input:?} as an ISO-8601 date, time, or datetime")]
    IsoFormat {
        /// The unparseable input
        input: String,
    },

    /// Input could not be parsed as a number.
    #[error("cannot parse {input:?} as a number")]
    NumberFormat {
        /// The unparseable input
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MatchError::NaiveBound { field: "after" };
        assert_eq!(
            err.to_string(),
            "bound `after` of a timezone-aware matcher is missing timezone information"
        );

        let err = MatchError::SubjectNotText { kind: Kind::Int };
        assert_eq!(err.to_string(), "expected a string subject, got int");
    }
}
