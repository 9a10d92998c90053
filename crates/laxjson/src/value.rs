//! Parsed value types and utilities.
//!
//! This module defines the [`Value`] enum, the tagged representation of one
//! parsed construct, along with its structural equality/hashing (so that any
//! `Value` can serve as a dictionary key) and its `Display` rendering.

use std::{
    collections::HashMap,
    fmt,
    hash::{DefaultHasher, Hash, Hasher},
    mem,
};

/// An ordered sequence of values, produced by array parsing.
pub type List = Vec<Value>;

/// A mapping from values to values, produced by object parsing.
///
/// Keys are compared by full structural equality, so two separately parsed
/// but identical keys address the same entry. Insertion order is not
/// significant.
pub type Dict = HashMap<Value, Value>;

/// A parsed JSON-like value.
///
/// A `Value` is always exactly one of seven cases. Numbers are bifurcated at
/// parse time: a literal that parses exactly as a base-10 integer becomes
/// [`Integer`], anything else that parses as a float becomes [`Double`].
///
/// # Examples
///
/// ```
/// use laxjson::{Dict, Value};
///
/// let mut dict = Dict::new();
/// dict.insert(Value::String("key".into()), Value::Integer(985));
/// let v = Value::Dict(dict);
/// assert_eq!(v.to_string(), "{key: 985}");
/// ```
///
/// [`Integer`]: Value::Integer
/// [`Double`]: Value::Double
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The `null` literal, and the result of a failed parse.
    Null,
    /// The `true` or `false` literal.
    Boolean(bool),
    /// A number that parses exactly as a signed 64-bit integer.
    Integer(i64),
    /// Any other number.
    Double(f64),
    /// A quoted string, escapes decoded.
    String(String),
    /// An array.
    List(List),
    /// An object; any `Value` can be a key.
    Dict(Dict),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

// The parser cannot construct NaN (the number grammar has no spelling for
// it), so `Double` equality is total for every value this crate produces.
impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Boolean(b) => b.hash(state),
            Value::Integer(i) => i.hash(state),
            Value::Double(d) => {
                // Normalize -0.0 so that hash stays consistent with `==`.
                let d = if *d == 0.0 { 0.0 } else { *d };
                d.to_bits().hash(state);
            }
            Value::String(s) => s.hash(state),
            Value::List(list) => {
                list.len().hash(state);
                for element in list {
                    element.hash(state);
                }
            }
            Value::Dict(dict) => {
                // Commutative fold over the entries: equal dicts hash equal
                // regardless of iteration order.
                dict.len().hash(state);
                let mut folded: u64 = 0;
                for (key, value) in dict {
                    let mut entry = DefaultHasher::new();
                    key.hash(&mut entry);
                    value.hash(&mut entry);
                    folded = folded.wrapping_add(entry.finish());
                }
                folded.hash(state);
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<List> for Value {
    fn from(v: List) -> Self {
        Self::List(v)
    }
}

impl From<Dict> for Value {
    fn from(v: Dict) -> Self {
        Self::Dict(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use laxjson::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Double`].
    ///
    /// [`Double`]: Value::Double
    #[must_use]
    pub fn is_double(&self) -> bool {
        matches!(self, Self::Double(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`List`].
    ///
    /// [`List`]: Value::List
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(..))
    }

    /// Returns `true` if the value is [`Dict`].
    ///
    /// [`Dict`]: Value::Dict
    #[must_use]
    pub fn is_dict(&self) -> bool {
        matches!(self, Self::Dict(..))
    }
}

/// Reverse of the basic escape table used while parsing strings: maps a
/// control character back to its two-character escape spelling.
fn reverse_basic_escape(c: char) -> Option<&'static str> {
    Some(match c {
        '\x07' => "\\a",
        '\x08' => "\\b",
        '\x0C' => "\\f",
        '\n' => "\\n",
        '\r' => "\\r",
        '\t' => "\\t",
        '\x0B' => "\\v",
        _ => return None,
    })
}

/// Writes `src` with the reverse basic-escape table applied, unquoted.
///
/// Used for rendering string dictionary keys.
fn write_escaped<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match reverse_basic_escape(c) {
            Some(esc) => f.write_str(esc)?,
            None => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Writes `src` as a double-quoted literal, escaping quotes, backslashes and
/// the control characters of the basic escape table.
fn write_quoted<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    f.write_char('"')?;
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            c => match reverse_basic_escape(c) {
                Some(esc) => f.write_str(esc)?,
                None => f.write_char(c)?,
            },
        }
    }
    f.write_char('"')
}

impl Value {
    fn write_value(&self, f: &mut fmt::Formatter<'_>, as_key: bool) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Double(d) => write!(f, "{d}"),
            Value::String(s) => {
                if as_key {
                    write_escaped(s, f)
                } else {
                    write_quoted(s, f)
                }
            }
            Value::List(list) => {
                if as_key {
                    // Container keys render as a placeholder, not their
                    // full structure.
                    return f.write_str(if list.is_empty() { "[]" } else { "[...]" });
                }
                f.write_str("[")?;
                let mut first = true;
                for element in list {
                    if !first {
                        f.write_str(", ")?;
                    }
                    first = false;
                    element.write_value(f, false)?;
                }
                f.write_str("]")
            }
            Value::Dict(dict) => {
                if as_key {
                    return f.write_str(if dict.is_empty() { "{}" } else { "{...}" });
                }
                f.write_str("{")?;
                let mut first = true;
                for (key, value) in dict {
                    if !first {
                        f.write_str(", ")?;
                    }
                    first = false;
                    key.write_value(f, true)?;
                    f.write_str(": ")?;
                    value.write_value(f, false)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_value(f, false)
    }
}
