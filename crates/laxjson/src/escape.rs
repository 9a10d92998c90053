//! Incremental decoding of numeric and Unicode escape sequences.
//!
//! The [`EscapeDecoder`] consumes the characters following a backslash one at
//! a time and produces a decoded UTF-8 fragment once it has seen enough. It
//! understands four shapes:
//!
//! - `\ddd` — up to three octal digits, one byte
//! - `\xhh` — two hex digits, one byte
//! - `\uhhhh` — four hex digits, one UTF-16 code unit
//! - `\Uhhhhhhhh` — eight hex digits, one UTF-32 code point
//!
//! There is no error state: an unrecognized first character is passed
//! through literally (the backslash is dropped), and a sequence cut short by
//! a disqualifying character emits whatever value had accumulated by then.
//! The decoder must be [`reset`](EscapeDecoder::reset) between independent
//! sequences.

use log::trace;

/*
        x       u       U       0-7     8-9     a-f/A-F     other
start   hex     ucs2    ucs4    octal   end     end         end
octal   end     end     end     octal   end     end         end
hex     end     end     end     hex     hex     hex         end
ucs2    end     end     end     ucs2    ucs2    ucs2        end
ucs4    end     end     end     ucs4    ucs4    ucs4        end
end     end     end     end     end     end     end         end
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Octal,
    Hex,
    Ucs2,
    Ucs4,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    MarkX,
    MarkU2,
    MarkU4,
    OctalDigit,
    DecimalDigit,
    HexLetter,
    Other,
}

fn classify(c: char) -> Class {
    match c {
        'x' => Class::MarkX,
        'u' => Class::MarkU2,
        'U' => Class::MarkU4,
        '0'..='7' => Class::OctalDigit,
        '8' | '9' => Class::DecimalDigit,
        'a'..='f' | 'A'..='F' => Class::HexLetter,
        _ => Class::Other,
    }
}

impl State {
    fn next(self, class: Class) -> State {
        match self {
            State::Start => match class {
                Class::MarkX => State::Hex,
                Class::MarkU2 => State::Ucs2,
                Class::MarkU4 => State::Ucs4,
                Class::OctalDigit => State::Octal,
                _ => State::End,
            },
            State::Octal => match class {
                Class::OctalDigit => State::Octal,
                _ => State::End,
            },
            State::Hex | State::Ucs2 | State::Ucs4 => match class {
                Class::OctalDigit | Class::DecimalDigit | Class::HexLetter => self,
                _ => State::End,
            },
            State::End => State::End,
        }
    }

    /// Digits required before the state's value is complete.
    fn required_digits(self) -> u32 {
        match self {
            State::Start | State::End => 0,
            State::Octal => 3,
            State::Hex => 2,
            State::Ucs2 => 4,
            State::Ucs4 => 8,
        }
    }
}

/// Per-sequence escape decoding state machine.
///
/// One decoder is owned by each string-scanning call frame; it is never
/// shared between parses. Feed it the characters after the backslash until
/// [`feed`](Self::feed) returns a fragment, then [`reset`](Self::reset)
/// before the next sequence.
#[derive(Debug)]
pub(crate) struct EscapeDecoder {
    state: State,
    count: u32,
    value: u32,
}

impl EscapeDecoder {
    pub fn new() -> Self {
        Self {
            state: State::Start,
            count: 0,
            value: 0,
        }
    }

    /// Clears the accumulated digits and returns to the initial state.
    ///
    /// Skipping this between sequences corrupts the next decode.
    pub fn reset(&mut self) {
        self.state = State::Start;
        self.count = 0;
        self.value = 0;
    }

    /// Feeds one character, returning the decoded fragment once the sequence
    /// is complete and `None` while more input is needed.
    pub fn feed(&mut self, c: char) -> Option<String> {
        let previous = self.state;
        self.state = previous.next(classify(c));
        match self.state {
            State::Octal => {
                self.count += 1;
                self.value = self.value * 8 + (c as u32 - '0' as u32);
            }
            State::Hex | State::Ucs2 | State::Ucs4 => {
                // The leading x/u/U marker is not a digit.
                if let Some(digit) = c.to_digit(16) {
                    self.count += 1;
                    self.value = self.value * 16 + digit;
                }
            }
            _ => {}
        }
        trace!(
            "escape read: c={c:?} count={} value={:#x} state={:?}",
            self.count, self.value, self.state
        );
        if self.state == State::End {
            // Terminated early. An unrecognized escape passes the character
            // through literally; a cut-short numeric sequence emits the
            // value accumulated so far.
            return Some(match previous {
                State::Start | State::End => c.to_string(),
                numeric => encode(numeric, self.value),
            });
        }
        if self.count < self.state.required_digits() {
            return None;
        }
        Some(encode(self.state, self.value))
    }
}

/// Converts an accumulated value to UTF-8 text according to the state that
/// produced it.
fn encode(state: State, value: u32) -> String {
    let c = match state {
        // One byte, truncated; interpreted as a Latin-1 scalar since the
        // output string is UTF-8.
        State::Octal | State::Hex => char::from((value & 0xFF) as u8),
        // Lone surrogates and out-of-range code points become U+FFFD.
        State::Ucs2 | State::Ucs4 => {
            char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
        }
        State::Start | State::End => return String::new(),
    };
    c.to_string()
}
