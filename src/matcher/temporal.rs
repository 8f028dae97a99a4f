//! Matchers for temporal subjects.
//!
//! Four exact-kind matchers (date, time, naive datetime, timezone-aware
//! timestamp) plus a heterogeneous one accepting any temporal kind with
//! cross-kind coercion. Timestamp bounds may be relative durations, resolved
//! against a fresh zoned "now" on every evaluation so the same matcher can be
//! reused at different moments; resolution never writes back into the
//! matcher's configuration.

use crate::constraint::{MapFn, Predicate};
use crate::error::MatchError;
use crate::expected::Expected;
use crate::matcher::{impl_matcher_ops, prelude, Fields, Match, Prelude};
use crate::value::{Kind, Value};
use chrono::{
    DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc,
};
use std::cmp::Ordering;
use std::fmt;

/// Inclusive and exclusive before/after bounds over an ordered temporal type.
#[derive(Debug, Clone)]
struct WindowSpec<T> {
    after: Option<T>,
    before: Option<T>,
    after_strict: Option<T>,
    before_strict: Option<T>,
}

impl<T> Default for WindowSpec<T> {
    fn default() -> Self {
        Self {
            after: None,
            before: None,
            after_strict: None,
            before_strict: None,
        }
    }
}

impl<T: PartialOrd> WindowSpec<T> {
    fn check(&self, subject: &T) -> bool {
        if let Some(bound) = &self.after {
            if !(subject >= bound) {
                return false;
            }
        }
        if let Some(bound) = &self.before {
            if !(subject <= bound) {
                return false;
            }
        }
        if let Some(bound) = &self.after_strict {
            if !(subject > bound) {
                return false;
            }
        }
        if let Some(bound) = &self.before_strict {
            if !(subject < bound) {
                return false;
            }
        }
        true
    }
}

macro_rules! plain_temporal_matcher {
    ($(#[$docs:meta])* $name:ident, $display:literal, $variant:ident, $bound:ty) => {
        $(#[$docs])*
        #[derive(Default, Clone)]
        pub struct $name {
            map_before: Option<MapFn>,
            optional: Option<bool>,
            equals: Option<Expected>,
            window: WindowSpec<$bound>,
            satisfies: Option<Predicate>,
        }

        impl $name {
            /// A matcher with no engaged constraints beyond the kind check.
            pub fn new() -> Self {
                Self::default()
            }

            /// Apply a transform to the subject before any other check runs;
            /// a failing transform makes the match false.
            pub fn map_before(
                mut self,
                f: impl Fn(&Value) -> anyhow::Result<Value> + Send + Sync + 'static,
            ) -> Self {
                self.map_before = Some(MapFn::new(f));
                self
            }

            /// Use a prebuilt transform, e.g. the ISO-8601 parser.
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

            /// The subject must occur after or exactly on the bound.
            pub fn after(mut self, bound: $bound) -> Self {
                self.window.after = Some(bound);
                self
            }

            /// The subject must occur before or exactly on the bound.
            pub fn before(mut self, bound: $bound) -> Self {
                self.window.before = Some(bound);
                self
            }

            /// The subject must occur strictly after the bound.
            pub fn after_strict(mut self, bound: $bound) -> Self {
                self.window.after_strict = Some(bound);
                self
            }

            /// The subject must occur strictly before the bound.
            pub fn before_strict(mut self, bound: $bound) -> Self {
                self.window.before_strict = Some(bound);
                self
            }

            /// The subject must satisfy the predicate; a panicking predicate
            /// counts as a mismatch.
            pub fn satisfies(
                mut self,
                f: impl Fn(&Value) -> bool + Send + Sync + 'static,
            ) -> Self {
                self.satisfies = Some(Predicate::new(f));
                self
            }
        }

        impl Match for $name {
            fn try_matches(&self, subject: &Value) -> Result<bool, MatchError> {
                let subject = match prelude(&self.map_before, self.optional, subject) {
                    Prelude::Verdict(verdict) => return Ok(verdict),
                    Prelude::Continue(subject) => subject,
                };
                let Value::$variant(instant) = *subject else {
                    return Ok(false);
                };
                if let Some(operand) = &self.equals {
                    if !operand.matches_value(&subject)? {
                        return Ok(false);
                    }
                }
                if !self.window.check(&instant) {
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

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Fields::start(f, $display)
                    .opt("map_before", &self.map_before)
                    .opt("optional", &self.optional)
                    .opt("equals", &self.equals)
                    .opt("after", &self.window.after)
                    .opt("before", &self.window.before)
                    .opt("after_strict", &self.window.after_strict)
                    .opt("before_strict", &self.window.before_strict)
                    .opt("satisfies", &self.satisfies)
                    .finish()
            }
        }

        impl_matcher_ops!($name);
    };
}

plain_temporal_matcher!(
    /// Matches calendar-date subjects.
    DateMatch,
    "Date",
    Date,
    NaiveDate
);

plain_temporal_matcher!(
    /// Matches time-of-day subjects.
    TimeMatch,
    "Time",
    Time,
    NaiveTime
);

plain_temporal_matcher!(
    /// Matches naive (zone-less) datetime subjects.
    DateTimeMatch,
    "DateTime",
    DateTime,
    NaiveDateTime
);

/// A bound of a timezone-aware matcher: an absolute zoned instant, or a
/// duration resolved against "now" at every evaluation.
#[derive(Debug, Clone, Copy)]
pub enum TimeBound {
    /// An absolute zoned instant
    Absolute(DateTime<FixedOffset>),
    /// An offset from the moment the assertion runs
    Relative(Duration),
}

impl TimeBound {
    fn resolve(&self, now: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            TimeBound::Absolute(instant) => *instant,
            TimeBound::Relative(offset) => (now + *offset).fixed_offset(),
        }
    }
}

impl fmt::Display for TimeBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeBound::Absolute(instant) => write!(f, "{}", instant.to_rfc3339()),
            TimeBound::Relative(offset) => write!(f, "now{:+}s", offset.num_seconds()),
        }
    }
}

impl From<DateTime<FixedOffset>> for TimeBound {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        TimeBound::Absolute(instant)
    }
}

impl From<DateTime<Utc>> for TimeBound {
    fn from(instant: DateTime<Utc>) -> Self {
        TimeBound::Absolute(instant.fixed_offset())
    }
}

impl From<Duration> for TimeBound {
    fn from(offset: Duration) -> Self {
        TimeBound::Relative(offset)
    }
}

/// Matches timezone-aware datetime subjects (timestamps).
///
/// Every bound carries timezone information by construction; a naive datetime
/// subject is a usage error rather than a quiet mismatch, because comparing
/// zoned and unzoned instants is meaningless.
#[derive(Default, Clone)]
pub struct TimestampMatch {
    map_before: Option<MapFn>,
    optional: Option<bool>,
    equals: Option<Expected>,
    window: WindowSpec<TimeBound>,
    satisfies: Option<Predicate>,
}

impl TimestampMatch {
    /// A matcher accepting every timestamp.
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

    /// Use a prebuilt transform, e.g. the ISO-8601 parser.
    pub fn map_before_with(mut self, transform: MapFn) -> Self {
        self.map_before = Some(transform);
        self
    }

    /// Whether a null subject is accepted.
    pub fn optional(mut self, allowed: bool) -> Self {
        self.optional = Some(allowed);
        self
    }

    /// The subject must equal the operand exactly; a naive datetime operand
    /// is a usage error at evaluation.
    pub fn equals(mut self, operand: impl Into<Expected>) -> Self {
        self.equals = Some(operand.into());
        self
    }

    /// The subject must occur after or exactly on the bound.
    pub fn after(mut self, bound: impl Into<TimeBound>) -> Self {
        self.window.after = Some(bound.into());
        self
    }

    /// The subject must occur before or exactly on the bound.
    pub fn before(mut self, bound: impl Into<TimeBound>) -> Self {
        self.window.before = Some(bound.into());
        self
    }

    /// The subject must occur strictly after the bound.
    pub fn after_strict(mut self, bound: impl Into<TimeBound>) -> Self {
        self.window.after_strict = Some(bound.into());
        self
    }

    /// The subject must occur strictly before the bound.
    pub fn before_strict(mut self, bound: impl Into<TimeBound>) -> Self {
        self.window.before_strict = Some(bound.into());
        self
    }

    /// The subject must satisfy the predicate; a panicking predicate counts
    /// as a mismatch.
    pub fn satisfies(mut self, f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.satisfies = Some(Predicate::new(f));
        self
    }
}

impl Match for TimestampMatch {
    fn try_matches(&self, subject: &Value) -> Result<bool, MatchError> {
        let subject = match prelude(&self.map_before, self.optional, subject) {
            Prelude::Verdict(verdict) => return Ok(verdict),
            Prelude::Continue(subject) => subject,
        };
        let instant = match *subject {
            Value::Timestamp(instant) => instant,
            Value::DateTime(_) => return Err(MatchError::NaiveSubject),
            _ => return Ok(false),
        };
        if let Some(operand) = &self.equals {
            if matches!(operand, Expected::Value(Value::DateTime(_))) {
                return Err(MatchError::NaiveBound { field: "equals" });
            }
            if !operand.matches_value(&subject)? {
                return Ok(false);
            }
        }
        // Relative bounds resolve against a fresh now on every evaluation;
        // the resolved instants stay local to this call.
        let now = Utc::now();
        let resolved = WindowSpec {
            after: self.window.after.map(|b| b.resolve(now)),
            before: self.window.before.map(|b| b.resolve(now)),
            after_strict: self.window.after_strict.map(|b| b.resolve(now)),
            before_strict: self.window.before_strict.map(|b| b.resolve(now)),
        };
        if !resolved.check(&instant) {
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

impl fmt::Display for TimestampMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::start(f, "Timestamp")
            .opt("map_before", &self.map_before)
            .opt("optional", &self.optional)
            .opt("equals", &self.equals)
            .opt("after", &self.window.after)
            .opt("before", &self.window.before)
            .opt("after_strict", &self.window.after_strict)
            .opt("before_strict", &self.window.before_strict)
            .opt("satisfies", &self.satisfies)
            .finish()
    }
}

impl_matcher_ops!(TimestampMatch);

/// A bound of the heterogeneous temporal matcher.
#[derive(Debug, Clone, Copy)]
pub enum TemporalBound {
    /// A calendar date
    Date(NaiveDate),
    /// A time of day
    Time(NaiveTime),
    /// A naive datetime
    DateTime(NaiveDateTime),
    /// A zoned instant
    Timestamp(DateTime<FixedOffset>),
    /// An offset from the moment the assertion runs
    Relative(Duration),
}

impl TemporalBound {
    fn describe(&self) -> &'static str {
        match self {
            TemporalBound::Date(_) => "date",
            TemporalBound::Time(_) => "time",
            TemporalBound::DateTime(_) => "datetime",
            TemporalBound::Timestamp(_) => "timestamp",
            TemporalBound::Relative(_) => "relative",
        }
    }
}

impl fmt::Display for TemporalBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemporalBound::Date(d) => write!(f, "{d}"),
            TemporalBound::Time(t) => write!(f, "{t}"),
            TemporalBound::DateTime(dt) => write!(f, "{dt}"),
            TemporalBound::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
            TemporalBound::Relative(offset) => write!(f, "now{:+}s", offset.num_seconds()),
        }
    }
}

impl From<NaiveDate> for TemporalBound {
    fn from(d: NaiveDate) -> Self {
        TemporalBound::Date(d)
    }
}

impl From<NaiveTime> for TemporalBound {
    fn from(t: NaiveTime) -> Self {
        TemporalBound::Time(t)
    }
}

impl From<NaiveDateTime> for TemporalBound {
    fn from(dt: NaiveDateTime) -> Self {
        TemporalBound::DateTime(dt)
    }
}

impl From<DateTime<FixedOffset>> for TemporalBound {
    fn from(ts: DateTime<FixedOffset>) -> Self {
        TemporalBound::Timestamp(ts)
    }
}

impl From<DateTime<Utc>> for TemporalBound {
    fn from(ts: DateTime<Utc>) -> Self {
        TemporalBound::Timestamp(ts.fixed_offset())
    }
}

impl From<Duration> for TemporalBound {
    fn from(offset: Duration) -> Self {
        TemporalBound::Relative(offset)
    }
}

/// Ordering of a temporal subject against a bound of a possibly different
/// kind.
///
/// A datetime subject against a date bound is coerced down to its date
/// component; same-kind pairs compare directly; relative bounds resolve
/// against zoned now and require a timestamp subject. Every other pairing is
/// a usage error, since it is almost certainly a test-authoring mistake.
fn compare_temporal(
    subject: &Value,
    bound: &TemporalBound,
    now: DateTime<Utc>,
) -> Result<Ordering, MatchError> {
    let mismatch = || MatchError::TemporalKindMismatch {
        subject: subject.kind(),
        bound: bound.describe(),
    };
    match (subject, bound) {
        (Value::Date(d), TemporalBound::Date(b)) => Ok(d.cmp(b)),
        (Value::Time(t), TemporalBound::Time(b)) => Ok(t.cmp(b)),
        (Value::DateTime(dt), TemporalBound::DateTime(b)) => Ok(dt.cmp(b)),
        (Value::DateTime(dt), TemporalBound::Date(b)) => Ok(dt.date().cmp(b)),
        (Value::Timestamp(ts), TemporalBound::Timestamp(b)) => Ok(ts.cmp(b)),
        (Value::Timestamp(ts), TemporalBound::Date(b)) => Ok(ts.date_naive().cmp(b)),
        (Value::Timestamp(ts), TemporalBound::Relative(offset)) => {
            Ok(ts.with_timezone(&Utc).cmp(&(now + *offset)))
        }
        _ => Err(mismatch()),
    }
}

/// Matches any temporal subject: date, time, naive datetime or timestamp,
/// with cross-kind bound coercion.
#[derive(Default, Clone)]
pub struct TemporalMatch {
    map_before: Option<MapFn>,
    optional: Option<bool>,
    equals: Option<Expected>,
    window: WindowSpec<TemporalBound>,
    satisfies: Option<Predicate>,
}

impl TemporalMatch {
    /// A matcher accepting every temporal subject.
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

    /// Use a prebuilt transform, e.g. the ISO-8601 parser.
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

    /// The subject must occur after or exactly on the bound.
    pub fn after(mut self, bound: impl Into<TemporalBound>) -> Self {
        self.window.after = Some(bound.into());
        self
    }

    /// The subject must occur before or exactly on the bound.
    pub fn before(mut self, bound: impl Into<TemporalBound>) -> Self {
        self.window.before = Some(bound.into());
        self
    }

    /// The subject must occur strictly after the bound.
    pub fn after_strict(mut self, bound: impl Into<TemporalBound>) -> Self {
        self.window.after_strict = Some(bound.into());
        self
    }

    /// The subject must occur strictly before the bound.
    pub fn before_strict(mut self, bound: impl Into<TemporalBound>) -> Self {
        self.window.before_strict = Some(bound.into());
        self
    }

    /// The subject must satisfy the predicate; a panicking predicate counts
    /// as a mismatch.
    pub fn satisfies(mut self, f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.satisfies = Some(Predicate::new(f));
        self
    }
}

impl Match for TemporalMatch {
    fn try_matches(&self, subject: &Value) -> Result<bool, MatchError> {
        let subject = match prelude(&self.map_before, self.optional, subject) {
            Prelude::Verdict(verdict) => return Ok(verdict),
            Prelude::Continue(subject) => subject,
        };
        if !subject.kind().is_within(Kind::Temporal) {
            return Ok(false);
        }
        if let Some(operand) = &self.equals {
            if !operand.matches_value(&subject)? {
                return Ok(false);
            }
        }
        let now = Utc::now();
        let within = |bound: &Option<TemporalBound>,
                      accept: &[Ordering]|
         -> Result<bool, MatchError> {
            match bound {
                None => Ok(true),
                Some(bound) => {
                    let ord = compare_temporal(&subject, bound, now)?;
                    Ok(accept.contains(&ord))
                }
            }
        };
        if !within(&self.window.after, &[Ordering::Greater, Ordering::Equal])? {
            return Ok(false);
        }
        if !within(&self.window.before, &[Ordering::Less, Ordering::Equal])? {
            return Ok(false);
        }
        if !within(&self.window.after_strict, &[Ordering::Greater])? {
            return Ok(false);
        }
        if !within(&self.window.before_strict, &[Ordering::Less])? {
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

impl fmt::Display for TemporalMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Fields::start(f, "AnyDateTime")
            .opt("map_before", &self.map_before)
            .opt("optional", &self.optional)
            .opt("equals", &self.equals)
            .opt("after", &self.window.after)
            .opt("before", &self.window.before)
            .opt("after_strict", &self.window.after_strict)
            .opt("before_strict", &self.window.before_strict)
            .opt("satisfies", &self.satisfies)
            .finish()
    }
}

impl_matcher_ops!(TemporalMatch);

/// Truncate a zoned instant to whole seconds.
pub fn floor_second(instant: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    instant
        .with_nanosecond(0)
        .expect("zeroed nanosecond is always valid")
}

/// Truncate a zoned instant to the start of its minute.
pub fn floor_minute(instant: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    floor_second(instant)
        .with_second(0)
        .expect("zeroed second is always valid")
}

/// Truncate a zoned instant to the start of its hour.
pub fn floor_hour(instant: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    floor_minute(instant)
        .with_minute(0)
        .expect("zeroed minute is always valid")
}

/// Truncate a zoned instant to the start of its day.
pub fn floor_day(instant: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    floor_hour(instant)
        .with_hour(0)
        .expect("zeroed hour is always valid")
}

/// Any naive datetime subject.
pub fn any_datetime() -> DateTimeMatch {
    DateTimeMatch::new()
}

/// Any calendar-date subject.
pub fn any_date() -> DateMatch {
    DateMatch::new()
}

/// Any time-of-day subject.
pub fn any_time() -> TimeMatch {
    TimeMatch::new()
}

/// Any temporal subject of any kind.
pub fn any_temporal() -> TemporalMatch {
    TemporalMatch::new()
}

/// Any string parseable as an ISO-8601 datetime, naive or zoned.
pub fn any_datetime_iso() -> TemporalMatch {
    TemporalMatch::new()
        .map_before_with(crate::parse::iso())
        .satisfies(|v| matches!(v.kind(), Kind::DateTime | Kind::Timestamp))
}

/// Any string parseable as an ISO-8601 date.
pub fn any_date_iso() -> DateMatch {
    DateMatch::new().map_before_with(crate::parse::iso())
}

/// Any string parseable as an ISO-8601 time.
pub fn any_time_iso() -> TimeMatch {
    TimeMatch::new().map_before_with(crate::parse::iso())
}

fn last(offset: Duration) -> TimestampMatch {
    TimestampMatch::new().after(offset).before(Duration::zero())
}

/// Any timestamp within the last second.
pub fn last_second() -> TimestampMatch {
    last(Duration::seconds(-1))
}

/// Any timestamp within the last 60 seconds.
pub fn last_minute() -> TimestampMatch {
    last(Duration::minutes(-1))
}

/// Any timestamp within the last 60 minutes.
pub fn last_hour() -> TimestampMatch {
    last(Duration::hours(-1))
}

/// Any timestamp within the last 24 hours.
pub fn last_day() -> TimestampMatch {
    last(Duration::days(-1))
}

/// Any timestamp within the last 7 days.
pub fn last_week() -> TimestampMatch {
    last(Duration::weeks(-1))
}

/// Any timestamp within the last 365 days.
pub fn last_year() -> TimestampMatch {
    last(Duration::days(-365))
}

/// Any ISO-8601 timestamp string within the last second.
pub fn last_second_iso() -> TimestampMatch {
    last_second().map_before_with(crate::parse::iso())
}

/// Any ISO-8601 timestamp string within the last 60 seconds.
pub fn last_minute_iso() -> TimestampMatch {
    last_minute().map_before_with(crate::parse::iso())
}

/// Any ISO-8601 timestamp string within the last 60 minutes.
pub fn last_hour_iso() -> TimestampMatch {
    last_hour().map_before_with(crate::parse::iso())
}

/// Any ISO-8601 timestamp string within the last 24 hours.
pub fn last_day_iso() -> TimestampMatch {
    last_day().map_before_with(crate::parse::iso())
}

/// Any ISO-8601 timestamp string within the last 7 days.
pub fn last_week_iso() -> TimestampMatch {
    last_week().map_before_with(crate::parse::iso())
}

/// Any ISO-8601 timestamp string within the last 365 days.
pub fn last_year_iso() -> TimestampMatch {
    last_year().map_before_with(crate::parse::iso())
}

/// Strict symmetric window of one unit around the floor of now, captured when
/// the matcher is constructed. A subject exactly at the floor always matches;
/// one whole unit away never does.
fn around_floor(floor: DateTime<FixedOffset>, unit: Duration) -> TimestampMatch {
    TimestampMatch::new()
        .after_strict(floor - unit)
        .before_strict(floor + unit)
}

/// Any timestamp in the current second.
pub fn this_second() -> TimestampMatch {
    around_floor(floor_second(Utc::now().fixed_offset()), Duration::seconds(1))
}

/// Any timestamp in the current minute.
pub fn this_minute() -> TimestampMatch {
    around_floor(floor_minute(Utc::now().fixed_offset()), Duration::minutes(1))
}

/// Any timestamp in the current hour.
pub fn this_hour() -> TimestampMatch {
    around_floor(floor_hour(Utc::now().fixed_offset()), Duration::hours(1))
}

/// Any timestamp on the current day.
pub fn this_day() -> TimestampMatch {
    around_floor(floor_day(Utc::now().fixed_offset()), Duration::days(1))
}

/// The same as [`this_day`].
pub fn today() -> TimestampMatch {
    this_day()
}

/// Any ISO-8601 timestamp string on the current day.
pub fn this_day_iso() -> TimestampMatch {
    this_day().map_before_with(crate::parse::iso())
}

/// The same as [`this_day_iso`].
pub fn today_iso() -> TimestampMatch {
    this_day_iso()
}
