//! The lenient recursive-descent parser.
//!
//! Parsing never fails with an error: every input yields some [`Value`],
//! and failure is signalled structurally by a consumed-length of zero. A
//! container that sees a zero-consumption child applies its own recovery
//! policy — arrays and objects abort their scan but keep the elements and
//! pairs already committed, and report zero consumption upward in turn.
//!
//! # Examples
//!
//! ```rust
//! use laxjson::{Value, parse};
//!
//! assert_eq!(
//!     parse("[1, , , "),
//!     Value::List(vec![Value::Integer(1), Value::Null, Value::Null])
//! );
//! ```

use log::trace;

use crate::{
    escape::EscapeDecoder,
    options::ParserOptions,
    value::{Dict, List, Value},
};

/// Whitespace characters absorbed into the accounting of whichever value
/// follows them.
const SPACES: [char; 6] = [' ', '\x0C', '\n', '\r', '\t', '\x0B'];

fn is_space(c: char) -> bool {
    SPACES.contains(&c)
}

fn has_prefix(input: &[char], literal: &str) -> bool {
    input.len() >= literal.len() && literal.chars().zip(input).all(|(l, c)| l == *c)
}

/// Parses as much of `text` as recognizable from the start, discarding any
/// trailing unconsumed characters.
///
/// A completely unparseable input yields [`Value::Null`]; use
/// [`parse_prefix`] to distinguish that from a parsed `null` literal.
///
/// # Examples
///
/// ```rust
/// use laxjson::{Value, parse};
///
/// assert_eq!(parse(" true"), Value::Boolean(true));
/// assert_eq!(parse("+72"), Value::Integer(72));
/// assert_eq!(parse("7.2"), Value::Double(7.2));
/// assert_eq!(parse("gibberish"), Value::Null);
/// ```
#[must_use]
pub fn parse(text: &str) -> Value {
    parse_prefix(text).0
}

/// Parses a prefix of `text`, returning the value and the number of
/// characters consumed.
///
/// A consumed count of `0` is the failure sentinel meaning no value could be
/// recognized, distinct from successfully parsing `null` (which consumes 4
/// characters). Callers wanting strict validation can compare the consumed
/// count against the input length.
#[must_use]
pub fn parse_prefix(text: &str) -> (Value, usize) {
    parse_prefix_with_options(text, &ParserOptions::default())
}

/// [`parse_prefix`] with explicit [`ParserOptions`].
#[must_use]
pub fn parse_prefix_with_options(text: &str, options: &ParserOptions) -> (Value, usize) {
    let chars: Vec<char> = text.chars().collect();
    parse_value(&chars, options, 0)
}

fn parse_value(input: &[char], options: &ParserOptions, depth: usize) -> (Value, usize) {
    if depth > options.max_depth {
        return (Value::Null, 0);
    }
    let Some(&first) = input.first() else {
        return (Value::Null, 0);
    };
    if is_space(first) {
        // Fold leading whitespace into the accounting of whatever follows.
        // Note this reports a non-zero consumption even when the inner parse
        // fails, which is what turns an empty slot after a comma into a
        // null element. All-whitespace input falls through to the sentinel.
        if let Some(prefix) = input.iter().position(|c| !is_space(*c)) {
            let (value, eaten) = parse_value(&input[prefix..], options, depth);
            return (value, eaten + prefix);
        }
        return (Value::Null, 0);
    }
    if has_prefix(input, "null") {
        return (Value::Null, 4);
    }
    if has_prefix(input, "true") {
        return (Value::Boolean(true), 4);
    }
    if has_prefix(input, "false") {
        return (Value::Boolean(false), 5);
    }
    match first {
        '0'..='9' | '+' | '-' | '.' => parse_number(input),
        '"' | '\'' => parse_string(input),
        '[' => parse_list(input, options, depth),
        '{' => parse_dict(input, options, depth),
        _ => (Value::Null, 0),
    }
}

/*
 * Strict JSON numbers are -?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?.
 * For robustness we also accept a leading '+', leading zeros and a bare
 * trailing '.', i.e. [+-]?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?.
 */
fn match_number(input: &[char]) -> usize {
    let peek = |i: usize| input.get(i).copied();
    let mut i = 0;
    if matches!(peek(i), Some('+' | '-')) {
        i += 1;
    }
    let integral = i;
    while matches!(peek(i), Some('0'..='9')) {
        i += 1;
    }
    if i == integral {
        return 0;
    }
    if peek(i) == Some('.') {
        i += 1;
        while matches!(peek(i), Some('0'..='9')) {
            i += 1;
        }
    }
    if matches!(peek(i), Some('e' | 'E')) {
        let mark = i;
        i += 1;
        if matches!(peek(i), Some('+' | '-')) {
            i += 1;
        }
        let exponent = i;
        while matches!(peek(i), Some('0'..='9')) {
            i += 1;
        }
        if i == exponent {
            // An exponent marker without digits is not part of the number.
            i = mark;
        }
    }
    i
}

fn parse_number(input: &[char]) -> (Value, usize) {
    let len = match_number(input);
    if len == 0 {
        return (Value::Null, 0);
    }
    let text: String = input[..len].iter().collect();
    // A whole-token integer parse first; anything it cannot fully consume
    // (a decimal point, an exponent) falls through to the float parse.
    if let Ok(i) = text.parse::<i64>() {
        return (Value::Integer(i), len);
    }
    if let Ok(d) = text.parse::<f64>() {
        return (Value::Double(d), len);
    }
    (Value::Null, 0)
}

/// Basic single-character escapes. A character that maps to itself is not a
/// basic escape and is handed to the [`EscapeDecoder`] instead. `\0` is left
/// to the decoder's octal path.
fn basic_escape(c: char) -> char {
    match c {
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0C',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0B',
        _ => c,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Raw,
    Escaped,
    Codecvt,
}

fn parse_string(input: &[char]) -> (Value, usize) {
    // The opening character, either quote style, is the only closer.
    let quote = input[0];
    let mut out = String::new();
    let mut phase = Phase::Raw;
    let mut decoder = EscapeDecoder::new();
    let mut i = 1;
    while i < input.len() {
        let c = input[i];
        match phase {
            Phase::Raw => {
                if c == '\\' {
                    phase = Phase::Escaped;
                } else if c == quote {
                    return (Value::String(out), i + 1);
                } else {
                    out.push(c);
                }
            }
            Phase::Escaped => {
                let escaped = basic_escape(c);
                if escaped == c {
                    // Not a basic escape: re-present this same character to
                    // the decoder.
                    phase = Phase::Codecvt;
                    continue;
                }
                out.push(escaped);
                phase = Phase::Raw;
            }
            Phase::Codecvt => {
                if let Some(fragment) = decoder.feed(c) {
                    out.push_str(&fragment);
                    decoder.reset();
                    phase = Phase::Raw;
                }
            }
        }
        i += 1;
    }
    // Input exhausted without a closer: an implicit, unflagged close.
    (Value::String(out), input.len())
}

fn parse_list(input: &[char], options: &ParserOptions, depth: usize) -> (Value, usize) {
    let mut list = List::new();
    let mut eaten = 1;
    while eaten < input.len() {
        // Close on the next significant character.
        let mut look = eaten;
        while look < input.len() && is_space(input[look]) {
            look += 1;
        }
        if input.get(look) == Some(&']') {
            eaten = look + 1;
            break;
        }
        let (element, element_eaten) = parse_value(&input[eaten..], options, depth + 1);
        if element_eaten == 0 {
            // Keep what was built, report the position as unparseable.
            return (Value::List(list), 0);
        }
        list.push(element);
        eaten += element_eaten;
        while eaten < input.len() && is_space(input[eaten]) {
            eaten += 1;
        }
        match input.get(eaten) {
            Some(&',') => eaten += 1,
            // ']' is consumed at the top of the next iteration; end of
            // input is an implicit close.
            Some(&']') | None => {}
            Some(_) => return (Value::List(list), 0),
        }
    }
    trace!("list eaten: {eaten}");
    (Value::List(list), eaten)
}

fn parse_dict(input: &[char], options: &ParserOptions, depth: usize) -> (Value, usize) {
    let mut dict = Dict::new();
    let mut eaten = 1;
    while eaten < input.len() {
        let mut look = eaten;
        while look < input.len() && is_space(input[look]) {
            look += 1;
        }
        if input.get(look) == Some(&'}') {
            eaten = look + 1;
            break;
        }
        let (key, key_eaten) = parse_value(&input[eaten..], options, depth + 1);
        if key_eaten == 0 {
            return (Value::Dict(dict), 0);
        }
        eaten += key_eaten;
        while eaten < input.len() && is_space(input[eaten]) {
            eaten += 1;
        }
        if input.get(eaten) != Some(&':') {
            // Missing colon aborts the scan; pairs committed on earlier
            // iterations stay, the in-flight key does not.
            return (Value::Dict(dict), 0);
        }
        eaten += 1;
        let (value, value_eaten) = parse_value(&input[eaten..], options, depth + 1);
        if value_eaten == 0 {
            return (Value::Dict(dict), 0);
        }
        // Structural key equality: a later equal key overwrites.
        dict.insert(key, value);
        eaten += value_eaten;
        while eaten < input.len() && is_space(input[eaten]) {
            eaten += 1;
        }
        match input.get(eaten) {
            Some(&',') => eaten += 1,
            Some(&'}') | None => {}
            Some(_) => return (Value::Dict(dict), 0),
        }
    }
    trace!("dict eaten: {eaten}");
    (Value::Dict(dict), eaten)
}
