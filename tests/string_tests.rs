//! Case tables for the string matcher.

use expect_rs::{any_nonempty_string, any_string, any_uuid, Match, StringMatch, Value};
use regex::Regex;
use rstest::rstest;

#[rstest]
// admission: text and byte text
#[case(Value::from("abc"), any_string(), true)]
#[case(Value::bytes(*b"abc"), any_string(), true)]
#[case(Value::Int(1), any_string(), false)]
// regex, full-match semantics
#[case(Value::from("abc"), any_string().regex("abc"), true)]
#[case(Value::from("abc"), any_string().regex("def"), false)]
#[case(Value::from("abcd"), any_string().regex("abc"), false)]
#[case(Value::from("abc"), any_string().regex_compiled(Regex::new("^abc$").unwrap()), true)]
#[case(Value::from("abc"), any_string().regex_compiled(Regex::new("^def$").unwrap()), false)]
// case-insensitivity propagates to the regex
#[case(Value::from("abc"), any_string().regex("ABC"), false)]
#[case(Value::from("abc"), any_string().regex("ABC").ignore_case(true), true)]
#[case(Value::from("abc"), any_string().regex_compiled(Regex::new("(?i)^ABC$").unwrap()), true)]
// prefix and suffix, with and without case folding
#[case(Value::from("abcdef"), any_string().starts_with("abc"), true)]
#[case(Value::from("abcdef"), any_string().starts_with("def"), false)]
#[case(Value::from("abcdef"), any_string().starts_with("ABC"), false)]
#[case(Value::from("abcdef"), any_string().starts_with("ABC").ignore_case(true), true)]
#[case(Value::from("abcdef"), any_string().ends_with("def"), true)]
#[case(Value::from("abcdef"), any_string().ends_with("abc"), false)]
#[case(Value::from("abcdef"), any_string().ends_with("DEF").ignore_case(true), true)]
// equals
#[case(Value::from("abc"), any_string().equals("abc"), true)]
#[case(Value::from("abc"), any_string().equals("def"), false)]
// length over characters
#[case(Value::from("abc"), any_string().length(3), true)]
#[case(Value::from("abc"), any_string().length(2), false)]
#[case(Value::from("abc"), any_string().min_length(2).max_length(4), true)]
#[case(Value::from("a"), any_string().min_length(2), false)]
// containment over characters
#[case(Value::from("ab"), any_string().subset_of("abc"), true)]
#[case(Value::from("ad"), any_string().subset_of("abc"), false)]
#[case(Value::from("abc"), any_string().superset_of("ab"), true)]
#[case(Value::from("ac"), any_string().superset_of("ab"), false)]
// optional
#[case(Value::Null, any_string(), false)]
#[case(Value::Null, any_string().optional(true), true)]
fn string_cases(#[case] subject: Value, #[case] matcher: StringMatch, #[case] result: bool) {
    assert_eq!(matcher.try_matches(&subject).unwrap(), result);
}

#[rstest]
#[case("123e4567-e89b-12d3-a456-426614174000", true)]
#[case("00000000-0000-0000-0000-000000000000", true)]
#[case("123E4567-E89B-12D3-A456-426614174000", false)]
#[case("123e4567e89b12d3a456426614174000", false)]
#[case("zzze4567-e89b-12d3-a456-426614174000", false)]
fn uuid_cases(#[case] subject: &str, #[case] result: bool) {
    assert_eq!(
        any_uuid().try_matches(&Value::from(subject)).unwrap(),
        result
    );
}

#[test]
fn nonempty_string_preset() {
    assert!(any_nonempty_string() == "a");
    assert!(!(any_nonempty_string() == ""));
}

#[test]
fn invalid_regex_source_raises() {
    let matcher = any_string().regex("(oops");
    assert!(matcher.try_matches(&Value::from("x")).is_err());
}

#[test]
fn bytes_match_text_constraints() {
    assert!(any_string().starts_with("ab") == Value::bytes(*b"abc"));
    assert!(any_string().regex("ab.") == Value::bytes(*b"abc"));
    // byte text never equals a string value
    assert!(!(any_string().equals("abc") == Value::bytes(*b"abc")));
}
