/// Configuration options for the lenient parser.
///
/// # Examples
///
/// ```rust
/// use laxjson::{ParserOptions, parse_prefix_with_options};
///
/// let options = ParserOptions { max_depth: 8 };
/// let deep = "[".repeat(64);
/// let (_, consumed) = parse_prefix_with_options(&deep, &options);
/// assert_eq!(consumed, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum container nesting depth.
    ///
    /// Recursion depth equals input nesting depth, so adversarially nested
    /// arrays/objects could otherwise exhaust the stack. A value nested
    /// deeper than this limit is treated as unparseable at its position and
    /// the enclosing container applies its normal recovery policy.
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}
