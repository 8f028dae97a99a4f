//! Case tables for the temporal matchers.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use expect_rs::{
    any_date, any_date_iso, any_datetime, any_datetime_iso, any_temporal, any_time, last_hour,
    last_hour_iso, this_hour, DateMatch, Match, MatchError, TemporalMatch, TimeMatch, Value,
};
use rstest::rstest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn datetime(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(0, 0, 0).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[rstest]
// admission: naive datetimes only
#[case(Value::DateTime(datetime(2020, 1, 1)), any_datetime(), true)]
#[case(Value::Date(date(2020, 1, 1)), any_datetime(), false)]
#[case(Value::Time(time(3, 2)), any_datetime(), false)]
#[case(Value::from("abc"), any_datetime(), false)]
// before and after, inclusive
#[case(Value::DateTime(datetime(2020, 3, 3)), any_datetime().after(datetime(2020, 1, 1)), true)]
#[case(Value::DateTime(datetime(2020, 3, 3)), any_datetime().after(datetime(2020, 3, 3)), true)]
#[case(Value::DateTime(datetime(2020, 3, 3)), any_datetime().after(datetime(2020, 3, 4)), false)]
#[case(Value::DateTime(datetime(2020, 3, 3)), any_datetime().before(datetime(2020, 1, 1)), false)]
#[case(Value::DateTime(datetime(2020, 3, 3)), any_datetime().before(datetime(2020, 3, 3)), true)]
#[case(Value::DateTime(datetime(2020, 3, 3)), any_datetime().before(datetime(2020, 3, 4)), true)]
// strict variants exclude the boundary
#[case(
    Value::DateTime(datetime(2020, 3, 3)),
    any_datetime().after_strict(datetime(2020, 3, 3)),
    false
)]
#[case(
    Value::DateTime(datetime(2020, 3, 3)),
    any_datetime().before_strict(datetime(2020, 3, 3)),
    false
)]
fn datetime_cases(
    #[case] subject: Value,
    #[case] matcher: expect_rs::DateTimeMatch,
    #[case] result: bool,
) {
    assert_eq!(matcher.try_matches(&subject).unwrap(), result);
}

#[rstest]
#[case(Value::Date(date(2020, 1, 1)), any_date(), true)]
#[case(Value::DateTime(datetime(2020, 1, 1)), any_date(), false)]
#[case(Value::Date(date(2020, 3, 3)), any_date().after(date(2020, 1, 1)), true)]
#[case(Value::Date(date(2020, 3, 3)), any_date().after(date(2020, 3, 4)), false)]
#[case(Value::Date(date(2020, 3, 3)), any_date().before(date(2020, 3, 4)), true)]
#[case(Value::Date(date(2020, 3, 3)), any_date().before(date(2020, 1, 1)), false)]
fn date_cases(#[case] subject: Value, #[case] matcher: DateMatch, #[case] result: bool) {
    assert_eq!(matcher.try_matches(&subject).unwrap(), result);
}

#[rstest]
#[case(Value::Time(time(3, 2)), any_time(), true)]
#[case(Value::Date(date(2020, 1, 1)), any_time(), false)]
#[case(Value::Time(time(3, 3)), any_time().after(time(1, 1)), true)]
#[case(Value::Time(time(3, 3)), any_time().after(time(3, 4)), false)]
#[case(Value::Time(time(3, 3)), any_time().before(time(3, 4)), true)]
#[case(Value::Time(time(3, 3)), any_time().before(time(1, 1)), false)]
fn time_cases(#[case] subject: Value, #[case] matcher: TimeMatch, #[case] result: bool) {
    assert_eq!(matcher.try_matches(&subject).unwrap(), result);
}

#[rstest]
// admission: every temporal kind
#[case(Value::DateTime(datetime(2020, 1, 1)), any_temporal(), true)]
#[case(Value::Date(date(2020, 1, 1)), any_temporal(), true)]
#[case(Value::Time(time(3, 2)), any_temporal(), true)]
#[case(Value::from("abc"), any_temporal(), false)]
// same-kind bounds compare directly
#[case(Value::DateTime(datetime(2020, 3, 3)), any_temporal().after(datetime(2020, 1, 1)), true)]
#[case(Value::DateTime(datetime(2020, 3, 3)), any_temporal().after(datetime(2020, 3, 4)), false)]
#[case(Value::Date(date(2020, 3, 3)), any_temporal().after(date(2020, 1, 1)), true)]
#[case(Value::Date(date(2020, 3, 3)), any_temporal().before(date(2020, 1, 1)), false)]
#[case(Value::Time(time(3, 3)), any_temporal().after(time(1, 1)), true)]
#[case(Value::Time(time(3, 3)), any_temporal().before(time(1, 1)), false)]
// a datetime subject coerces down to its date component for a date bound
#[case(Value::DateTime(datetime(2020, 3, 3)), any_temporal().after(date(2020, 1, 1)), true)]
#[case(Value::DateTime(datetime(2020, 3, 3)), any_temporal().after(date(2020, 3, 3)), true)]
#[case(Value::DateTime(datetime(2020, 3, 3)), any_temporal().after(date(2020, 3, 4)), false)]
#[case(Value::DateTime(datetime(2020, 3, 3)), any_temporal().before(date(2020, 1, 1)), false)]
fn temporal_cases(#[case] subject: Value, #[case] matcher: TemporalMatch, #[case] result: bool) {
    assert_eq!(matcher.try_matches(&subject).unwrap(), result);
}

#[rstest]
// incoercible pairings are usage errors, not quiet mismatches
#[case(Value::DateTime(datetime(2020, 3, 3)), any_temporal().after(time(1, 1)))]
#[case(Value::Date(date(2020, 3, 3)), any_temporal().after(datetime(2020, 1, 1)))]
#[case(Value::Date(date(2020, 3, 3)), any_temporal().after(time(1, 1)))]
#[case(Value::Time(time(3, 3)), any_temporal().after(datetime(2020, 1, 1)))]
#[case(Value::Time(time(3, 3)), any_temporal().after(date(2020, 1, 1)))]
fn temporal_incoercible_cases(#[case] subject: Value, #[case] matcher: TemporalMatch) {
    assert!(matches!(
        matcher.try_matches(&subject),
        Err(MatchError::TemporalKindMismatch { .. })
    ));
}

#[test]
fn relative_window_resolves_at_evaluation() {
    let matcher = last_hour();
    let now = Utc::now();
    assert!(matcher == (now - Duration::minutes(30)));
    assert!(!(matcher == (now - Duration::minutes(90))));
    // the same instance keeps working against a fresh now
    assert!(matcher == (Utc::now() - Duration::seconds(1)));
}

#[test]
fn naive_subject_against_timestamp_matcher_raises() {
    let naive = Value::DateTime(datetime(2020, 1, 1));
    assert!(matches!(
        last_hour().try_matches(&naive),
        Err(MatchError::NaiveSubject)
    ));
}

#[test]
fn floor_window_is_strict_and_symmetric() {
    let floor = expect_rs::floor_hour(Utc::now().fixed_offset());
    let matcher = this_hour();
    assert!(matcher == floor);
    assert!(!(matcher == (floor - Duration::hours(1))));
    assert!(!(matcher == (floor + Duration::hours(1))));
}

#[test]
fn iso_presets_parse_before_matching() {
    assert!(any_date_iso() == "2020-05-06");
    assert!(!(any_date_iso() == "abc"));
    assert!(any_datetime_iso() == "2020-05-06T07:08:09");
    assert!(any_datetime_iso() == "2020-05-06T07:08:09Z");
    assert!(!(any_datetime_iso() == "2020-05-06"));

    let recent = (Utc::now() - Duration::minutes(5)).to_rfc3339();
    assert!(last_hour_iso() == recent.as_str());
    let stale = (Utc::now() - Duration::hours(2)).to_rfc3339();
    assert!(!(last_hour_iso() == stale.as_str()));
}

#[test]
fn timestamp_equality_compares_instants() {
    let instant = DateTime::parse_from_rfc3339("2020-05-06T07:00:00+02:00").unwrap();
    let same_instant_utc = DateTime::parse_from_rfc3339("2020-05-06T05:00:00Z").unwrap();
    let matcher = expect_rs::TimestampMatch::new().equals(instant);
    assert!(matcher == same_instant_utc);
}
