//! Composable matcher objects for equality-based test assertions.
//!
//! A matcher is a configuration record that, compared for equality against an
//! arbitrary subject value, evaluates a set of independent constraints and
//! reports a single boolean verdict. Matchers nest freely: any field that
//! accepts a value to compare against also accepts another matcher.
//!
//! Write assertions with the matcher on the left:
//!
//! ```
//! use expect_rs::{any_dict, any_uuid, map_of, Expected, NumberMatch, OneOf, Value};
//!
//! assert!(NumberMatch::new().min(2).max(5) == 3);
//! assert!(OneOf::of([1, 2, 3]) == 2);
//!
//! // payload-shaped subjects come in through serde_json
//! let payload = Value::from(serde_json::json!({
//!     "id": "123e4567-e89b-12d3-a456-426614174000",
//!     "score": 3,
//! }));
//! assert!(any_dict().equals(map_of([
//!     ("id", Expected::from(any_uuid())),
//!     ("score", NumberMatch::new().min(0).into()),
//! ])) == payload);
//! ```
//!
//! Unengaged fields never cause a mismatch; engaged fields compose as a
//! short-circuit conjunction in a fixed order, with the `optional` flag
//! deciding null subjects before anything else and user predicates running
//! last. Failures inside user-supplied callables are contained as mismatches,
//! while unusable configurations (a naive datetime against a timezone-aware
//! matcher, incoercible temporal kinds, an invalid regex) surface as
//! [`MatchError`] — or a panic at the assertion site when using `==`.

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod constraint;
pub mod error;
pub mod expected;
pub mod matcher;
pub mod parse;
pub mod value;

pub use constraint::{MapFn, Predicate};
pub use error::MatchError;
pub use expected::{map_of, seq, Expected};
pub use matcher::{Match, ToSubject};
pub use value::{Kind, Value};

pub use matcher::any::{any, any_type, any_value, AnyMatch, TypeMatch, ValueMatch};
pub use matcher::collection::{
    any_collection, any_dict, any_list, any_nonempty_collection, any_nonempty_dict,
    any_nonempty_list, any_nonempty_set, any_nonempty_tuple, any_set, any_tuple, CollectionMatch,
    DictMatch, ListMatch, SetMatch, TupleMatch,
};
pub use matcher::number::{
    any_float, any_int, any_number, any_number_string, FloatMatch, IntMatch, NumberMatch,
};
pub use matcher::one_of::OneOf;
pub use matcher::string::{
    any_alphanumeric_string, any_nonempty_string, any_string, any_uuid, StringMatch,
};
pub use matcher::temporal::{
    any_date, any_date_iso, any_datetime, any_datetime_iso, any_temporal, any_time, any_time_iso,
    floor_day, floor_hour, floor_minute, floor_second, last_day, last_day_iso, last_hour,
    last_hour_iso, last_minute, last_minute_iso, last_second, last_second_iso, last_week,
    last_week_iso, last_year, last_year_iso, this_day, this_day_iso, this_hour, this_minute,
    this_second, today, today_iso, DateMatch, DateTimeMatch, TemporalBound, TemporalMatch,
    TimeBound, TimeMatch, TimestampMatch,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
