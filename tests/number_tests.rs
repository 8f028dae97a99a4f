//! Case tables for the number-family matchers.

use expect_rs::{
    any_float, any_int, any_number, any_number_string, FloatMatch, IntMatch, Kind, Match,
    NumberMatch, Value,
};
use rstest::rstest;

#[rstest]
// admission
#[case(Value::from("abc"), any_number(), false)]
#[case(Value::Int(1), any_number(), true)]
#[case(Value::Float(1.2), any_number(), true)]
// map before
#[case(Value::from("abc"), any_number_string(), false)]
#[case(Value::from("1"), any_number_string(), true)]
// optional
#[case(Value::Null, any_number(), false)]
#[case(Value::Null, any_number().optional(true), true)]
// kind narrowing
#[case(Value::Int(1), any_number().type_is(Kind::Int), true)]
#[case(Value::Int(1), any_number().type_is(Kind::Float), false)]
#[case(Value::Int(1), any_number().instance_of(Kind::Int), true)]
#[case(Value::Int(1), any_number().instance_of(Kind::Float), false)]
// equals
#[case(Value::Int(1), any_number().equals(2), false)]
#[case(Value::Int(1), any_number().equals(1), true)]
// satisfies
#[case(Value::Int(1), any_number().satisfies(|v| matches!(v, Value::Int(i) if i % 2 == 0)), false)]
#[case(Value::Int(1), any_number().satisfies(|v| matches!(v, Value::Int(i) if i % 2 == 1)), true)]
// min
#[case(Value::Int(2), any_number().min(3), false)]
#[case(Value::Int(2), any_number().min(2), true)]
#[case(Value::Int(2), any_number().min(1), true)]
// max
#[case(Value::Int(2), any_number().max(1), false)]
#[case(Value::Int(2), any_number().max(2), true)]
#[case(Value::Int(2), any_number().max(3), true)]
// min strict
#[case(Value::Int(2), any_number().min_strict(3), false)]
#[case(Value::Int(2), any_number().min_strict(2), false)]
#[case(Value::Int(2), any_number().min_strict(1), true)]
// max strict
#[case(Value::Int(2), any_number().max_strict(1), false)]
#[case(Value::Int(2), any_number().max_strict(2), false)]
#[case(Value::Int(2), any_number().max_strict(3), true)]
// close to
#[case(Value::Int(2), any_number().close_to(1.5), false)]
#[case(Value::Float(0.8), any_number().close_to(1), false)]
#[case(Value::Float(1.2), any_number().close_to(1), false)]
#[case(Value::Int(1), any_number().close_to(1), true)]
#[case(Value::Float(0.8), any_number().close_to(1).error(0.1), false)]
#[case(Value::Float(1.2), any_number().close_to(1).error(0.1), false)]
#[case(Value::Float(0.8), any_number().close_to(1).error(0.3), true)]
#[case(Value::Float(1.2), any_number().close_to(1).error(0.3), true)]
fn number_cases(#[case] subject: Value, #[case] matcher: NumberMatch, #[case] result: bool) {
    assert_eq!(matcher.try_matches(&subject).unwrap(), result);
}

#[rstest]
#[case(Value::from("abc"), false)]
#[case(Value::Int(1), true)]
#[case(Value::Float(1.2), false)]
fn int_admission(#[case] subject: Value, #[case] result: bool) {
    assert_eq!(any_int().try_matches(&subject).unwrap(), result);
}

#[rstest]
#[case(Value::from("abc"), false)]
#[case(Value::Int(1), false)]
#[case(Value::Float(1.2), true)]
fn float_admission(#[case] subject: Value, #[case] result: bool) {
    assert_eq!(any_float().try_matches(&subject).unwrap(), result);
}

#[rstest]
#[case(Value::Int(3), IntMatch::new().min(2).max(5), true)]
#[case(Value::Int(6), IntMatch::new().min(2).max(5), false)]
#[case(Value::Int(1), IntMatch::new().min(2).max(5), false)]
fn int_bounds(#[case] subject: Value, #[case] matcher: IntMatch, #[case] result: bool) {
    assert_eq!(matcher.try_matches(&subject).unwrap(), result);
}

#[rstest]
#[case(Value::Float(1.0), FloatMatch::new().close_to(1), true)]
#[case(Value::Float(1.5), FloatMatch::new().close_to(1), false)]
fn float_close_to(#[case] subject: Value, #[case] matcher: FloatMatch, #[case] result: bool) {
    assert_eq!(matcher.try_matches(&subject).unwrap(), result);
}

#[test]
fn bounds_compare_across_numeric_kinds() {
    assert!(any_number().min(2).max(5) == 3.5);
    assert!(any_number().min(2.5) == 3);
    assert!(!(any_number().min(2.5) == 2));
}
