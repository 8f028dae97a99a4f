//! Case tables for the any-family matchers.

use expect_rs::{any, any_type, any_value, AnyMatch, Kind, Match, TypeMatch, Value, ValueMatch};
use rstest::rstest;

#[rstest]
// admission: anything at all
#[case(Value::Int(1), any(), true)]
#[case(Value::from("abc"), any(), true)]
#[case(Value::List(vec![]), any(), true)]
#[case(Value::Kind(Kind::Int), any(), true)]
// map before and equals
#[case(Value::Int(1), any().equals(2), false)]
#[case(
    Value::Int(1),
    any().equals(2).map_before(|v| match v {
        Value::Int(i) => Ok(Value::Int(i + 1)),
        _ => anyhow::bail!("not an int"),
    }),
    true
)]
// predicate
#[case(Value::Int(1), any().satisfies(|v| matches!(v, Value::Int(i) if i % 2 == 0)), false)]
#[case(Value::Int(2), any().satisfies(|v| matches!(v, Value::Int(i) if i % 2 == 0)), true)]
// optional
#[case(Value::Null, any(), false)]
#[case(Value::Null, any().optional(true), true)]
fn any_cases(#[case] subject: Value, #[case] matcher: AnyMatch, #[case] result: bool) {
    assert_eq!(matcher.try_matches(&subject).unwrap(), result);
}

#[rstest]
// admission: data values only
#[case(Value::Int(1), any_value(), true)]
#[case(Value::from("abc"), any_value(), true)]
#[case(Value::List(vec![]), any_value(), true)]
#[case(Value::Kind(Kind::Int), any_value(), false)]
// kind narrowing
#[case(Value::Int(1), any_value().type_is(Kind::Int), true)]
#[case(Value::Int(1), any_value().type_is(Kind::Float), false)]
#[case(Value::Int(1), any_value().instance_of(Kind::Number), true)]
#[case(Value::from("abc"), any_value().instance_of(Kind::Number), false)]
// equals
#[case(Value::Int(1), any_value().equals(2), false)]
#[case(Value::Int(2), any_value().equals(2), true)]
fn any_value_cases(#[case] subject: Value, #[case] matcher: ValueMatch, #[case] result: bool) {
    assert_eq!(matcher.try_matches(&subject).unwrap(), result);
}

#[rstest]
// admission: kind tags only
#[case(Value::Int(1), any_type(), false)]
#[case(Value::from("abc"), any_type(), false)]
#[case(Value::List(vec![]), any_type(), false)]
#[case(Value::Kind(Kind::Int), any_type(), true)]
// equals
#[case(Value::Kind(Kind::Int), any_type().equals(Kind::String), false)]
#[case(Value::Kind(Kind::String), any_type().equals(Kind::String), true)]
// predicate
#[case(Value::Kind(Kind::Int), any_type().satisfies(|v| *v == Value::Kind(Kind::String)), false)]
#[case(Value::Kind(Kind::String), any_type().satisfies(|v| *v == Value::Kind(Kind::String)), true)]
// directional lattice checks
#[case(Value::Kind(Kind::List), any_type().subclass_of(Kind::Collection), true)]
#[case(Value::Kind(Kind::List), any_type().superclass_of(Kind::Collection), false)]
#[case(Value::Kind(Kind::Collection), any_type().subclass_of(Kind::List), false)]
#[case(Value::Kind(Kind::Collection), any_type().superclass_of(Kind::List), true)]
#[case(Value::Kind(Kind::List), any_type().superclass_of(Kind::List), true)]
#[case(Value::Kind(Kind::List), any_type().subclass_of(Kind::List), true)]
fn any_type_cases(#[case] subject: Value, #[case] matcher: TypeMatch, #[case] result: bool) {
    assert_eq!(matcher.try_matches(&subject).unwrap(), result);
}

#[test]
fn vars_asserts_on_field_mappings() {
    let record = Value::from(serde_json::json!({"name": "ada", "age": 36}));
    let matcher = any().vars(expect_rs::map_of([
        ("name", expect_rs::Expected::from("ada")),
        ("age", expect_rs::NumberMatch::new().min(0).into()),
    ]));
    assert!(matcher == record);
    assert!(!(matcher == Value::from("not a record")));
}
