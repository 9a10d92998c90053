use rstest::rstest;

use crate::{Dict, ParserOptions, Value, parse, parse_prefix, parse_prefix_with_options};

fn ints(values: &[i64]) -> Value {
    Value::List(values.iter().copied().map(Value::Integer).collect())
}

#[test]
fn failure_sentinel_is_distinct_from_null() {
    assert_eq!(parse_prefix(""), (Value::Null, 0));
    assert_eq!(parse_prefix("   "), (Value::Null, 0));
    assert_eq!(parse_prefix("hello"), (Value::Null, 0));
    assert_eq!(parse_prefix("]"), (Value::Null, 0));
    // A parsed `null` consumes 4 characters.
    assert_eq!(parse_prefix("null"), (Value::Null, 4));
}

#[rstest]
#[case("[1, 2,]")]
#[case("[1, 2")]
#[case("[1, 2,")]
fn tolerant_list_close(#[case] input: &str) {
    assert_eq!(parse(input), ints(&[1, 2]));
}

#[test_log::test]
fn empty_slots_after_whitespace_become_null() {
    assert_eq!(
        parse("[1, , , "),
        Value::List(vec![Value::Integer(1), Value::Null, Value::Null])
    );
}

#[test]
fn list_keeps_prior_elements_but_reports_failure() {
    // The bad separator makes the position unparseable, yet the elements
    // committed before it survive in the returned value.
    let (value, consumed) = parse_prefix("[1, 2; 3]");
    assert_eq!(consumed, 0);
    assert_eq!(value, ints(&[1, 2]));
}

#[rstest]
#[case("[7, 3..14]", Value::List(vec![Value::Integer(7), Value::Double(3.0)]))]
#[case("[8, 8b, 12.7]", Value::List(vec![Value::Integer(8), Value::Integer(8)]))]
#[case("[9, 5.7e3.6, 0]", Value::List(vec![Value::Integer(9), Value::Double(5700.0)]))]
fn malformed_numbers_truncate_the_list(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(parse(input), expected);
}

#[test]
fn unterminated_string_closes_implicitly() {
    assert_eq!(parse_prefix("'abc"), (Value::String("abc".into()), 4));
}

#[test_log::test]
fn missing_colon_discards_the_pair() {
    assert_eq!(parse("{'key'  [1, , "), Value::Dict(Dict::new()));
    assert_eq!(parse("{'bad key'':  6} "), Value::Dict(Dict::new()));
}

#[test]
fn failed_value_discards_the_pair() {
    // The value aborts with zero consumption, so the pair is never
    // committed.
    assert_eq!(parse("{'k\"ey':  [1, , "), Value::Dict(Dict::new()));
}

#[test]
fn committed_pairs_survive_a_later_failure() {
    let mut expected = Dict::new();
    expected.insert(Value::String("a".into()), Value::Integer(1));

    // Colon missing on the second pair.
    assert_eq!(parse("{'a': 1, 'b'  2}"), Value::Dict(expected.clone()));
    // Bad separator after the first pair.
    assert_eq!(parse("{'a': 1; 'b': 2}"), Value::Dict(expected.clone()));
    // Second value unparseable. No space after the colon: whitespace
    // folding would otherwise turn the empty slot into a null value.
    let (value, consumed) = parse_prefix("{'a': 1, 'b':}");
    assert_eq!(consumed, 0);
    assert_eq!(value, Value::Dict(expected));
}

#[test]
fn whitespace_folding_turns_an_empty_value_slot_into_null() {
    let mut expected = Dict::new();
    expected.insert(Value::String("a".into()), Value::Integer(1));
    expected.insert(Value::String("b".into()), Value::Null);
    assert_eq!(parse("{'a': 1, 'b': }"), Value::Dict(expected));
}

#[rstest]
#[case("{'a': 1,}")]
#[case("{'a': 1")]
fn tolerant_dict_close(#[case] input: &str) {
    let mut expected = Dict::new();
    expected.insert(Value::String("a".into()), Value::Integer(1));
    assert_eq!(parse(input), Value::Dict(expected));
}

#[test]
fn container_failure_propagates_upward() {
    // The inner list aborts, so the outer list aborts too, each keeping
    // what it had built.
    let (value, consumed) = parse_prefix("[[1; 2], 3]");
    assert_eq!(consumed, 0);
    assert_eq!(value, Value::List(vec![ints(&[1])]));
}

#[test]
fn depth_limit_reports_the_sentinel() {
    let deep = "[".repeat(1000);
    let (value, consumed) = parse_prefix(&deep);
    assert_eq!(consumed, 0);
    assert!(value.is_list());

    let options = ParserOptions { max_depth: 2000 };
    let (value, consumed) = parse_prefix_with_options(&deep, &options);
    assert_eq!(consumed, 1000);
    assert!(value.is_list());
}
