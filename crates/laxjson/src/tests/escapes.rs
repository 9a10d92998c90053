use rstest::rstest;

use crate::{Value, escape::EscapeDecoder, parse};

/// Feeds `input` into a fresh decoder and returns the fragment it produces,
/// panicking if the decoder still wants more input afterwards.
fn decode(input: &str) -> String {
    let mut decoder = EscapeDecoder::new();
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if let Some(fragment) = decoder.feed(c) {
            assert_eq!(chars.next(), None, "decoder finished early on {input:?}");
            return fragment;
        }
    }
    panic!("decoder wanted more input after {input:?}");
}

#[rstest]
#[case("012", "\n")]
#[case("x0a", "\n")]
#[case("u000a", "\n")]
#[case("U0000000a", "\n")]
#[case("u0041", "A")]
#[case("U00004f60", "你")]
#[case("777", "\u{ff}")] // 0o777 truncates to one byte
fn complete_sequences(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(decode(input), expected);
}

#[rstest]
#[case("g", "g")]
#[case("8", "8")]
#[case("\"", "\"")]
#[case("\\", "\\")]
fn unrecognized_escapes_pass_through(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(decode(input), expected);
}

#[test_log::test]
fn cut_short_sequences_emit_the_accumulated_value() {
    // The disqualifying character is consumed by the decoder.
    assert_eq!(decode("01,"), "\u{1}");
    assert_eq!(decode("x1,"), "\u{1}");
    assert_eq!(decode("u41x"), "\u{41}");
}

#[test]
fn lone_surrogate_becomes_replacement_character() {
    assert_eq!(decode("ud800"), "\u{fffd}");
}

#[test]
fn needs_more_until_the_count_is_reached() {
    let mut decoder = EscapeDecoder::new();
    assert_eq!(decoder.feed('u'), None);
    assert_eq!(decoder.feed('0'), None);
    assert_eq!(decoder.feed('0'), None);
    assert_eq!(decoder.feed('4'), None);
    assert_eq!(decoder.feed('1'), Some("A".into()));
}

#[test]
fn reset_starts_a_new_sequence() {
    let mut decoder = EscapeDecoder::new();
    assert_eq!(decoder.feed('0'), None);
    decoder.reset();
    assert_eq!(decoder.feed('x'), None);
    assert_eq!(decoder.feed('0'), None);
    assert_eq!(decoder.feed('a'), Some("\n".into()));
}

#[rstest]
#[case(r#""hello\x0aworld""#, "hello\nworld")]
#[case(r"'nested\012'", "nested\n")]
#[case(r#""\u000a""#, "\n")]
#[case(r#""\U0000000a""#, "\n")]
#[case(r#""bad escaped format \g""#, "bad escaped format g")]
#[case(r#""\"escaped\"\n""#, "\"escaped\"\n")]
#[case(r#""tab\there""#, "tab\there")]
#[case(r#""\a\b\f\r\v""#, "\x07\x08\x0C\r\x0B")]
#[case(r#""我爱你!""#, "我爱你!")]
#[case(r#""\U00004f60\U00007231\U00006211?""#, "你爱我?")]
fn escapes_inside_strings(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse(input), Value::String(expected.into()));
}

#[test]
fn consecutive_escapes_decode_independently() {
    // Each sequence gets a reset decoder; state must not leak across.
    assert_eq!(parse(r#""\x41\x42\012""#), Value::String("AB\n".into()));
}

#[test]
fn octal_stops_at_three_digits() {
    // Three digits complete the sequence; the fourth is raw text.
    assert_eq!(parse(r"'\0122'"), Value::String("\n2".into()));
}
