//! A lenient, recovery-oriented JSON parser.
//!
//! `laxjson` converts a character sequence into a [`Value`] tree, accepting a
//! deliberate superset of JSON: single-quoted strings, unquoted numeric
//! object keys, leading `+` and leading zeros on numbers, trailing commas,
//! missing closing brackets, and octal/hex/UTF-16/UTF-32 backslash escapes.
//! Malformed input never produces an error; the parser keeps as much of a
//! construct as it can recognize and reports failure structurally through a
//! consumed-length of zero.
//!
//! # Examples
//!
//! ```rust
//! use laxjson::{Value, parse, parse_prefix};
//!
//! // Trailing commas and unterminated arrays are tolerated.
//! assert_eq!(
//!     parse("[1, 2,]"),
//!     Value::List(vec![Value::Integer(1), Value::Integer(2)])
//! );
//! assert_eq!(
//!     parse("[1, 2"),
//!     Value::List(vec![Value::Integer(1), Value::Integer(2)])
//! );
//!
//! // `parse_prefix` exposes how many characters were recognized, so a
//! // caller can distinguish a parsed `null` (4 characters) from failure
//! // (0 characters).
//! assert_eq!(parse_prefix("null trailing"), (Value::Null, 4));
//! assert_eq!(parse_prefix("trailing"), (Value::Null, 0));
//! ```

mod escape;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use options::ParserOptions;
pub use parser::{parse, parse_prefix, parse_prefix_with_options};
pub use value::{Dict, List, Value};
